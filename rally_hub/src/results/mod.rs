//! Results archive: finished tournaments, match results, spotlights, and
//! the browsing pipeline over them.

pub mod browse;
pub mod models;

pub use browse::{ResultFilters, TournamentGroup, group_by_tournament};
pub use models::{MatchResult, Medal, Tier, TournamentSummary, WinnerSpotlight};
