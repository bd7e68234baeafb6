//! Tournament catalog: listings, the browsing pipeline, and session
//! registration state.

pub mod browse;
pub mod models;
pub mod registration;

pub use browse::{DateWindow, FEE_RANGE, RegistrationStatus, TournamentFilters};
pub use models::{CLOSING_SOON_DAYS, Tournament, TournamentId, Usd};
pub use registration::{Registered, RegistrationBook, RegistrationError};
