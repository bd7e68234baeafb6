//! # Rally Hub
//!
//! A pickleball tournament catalog: browse tournaments, the match schedule,
//! leaderboards, player profiles, and past results.
//!
//! The library is the data half of the application. Catalogs are plain
//! record lists (backed by [`fixtures`] in lieu of a backend), and every
//! view is derived on demand through the same pipeline shape:
//!
//! 1. a filter-state struct whose fields default to "no constraint",
//! 2. AND-combined field predicates (list-valued fields OR within),
//! 3. a page-specific sort,
//! 4. optional display-only derivation (leaderboard re-ranking, day or
//!    tournament grouping).
//!
//! Derivations are pure: date-sensitive filters take `today` as an
//! argument and the source records are never mutated. The only stateful
//! piece is [`tournament::RegistrationBook`], the session's registered-
//! tournament set.
//!
//! ## Core Modules
//!
//! - [`tournament`]: listings, browsing filters, registration
//! - [`player`]: roster, directory filters/sorts, leaderboard re-ranking
//! - [`schedule`]: matches, status tabs, day grouping
//! - [`results`]: archive, result filters, tournament grouping
//!
//! ## Example
//!
//! ```
//! use rally_hub::fixtures;
//! use rally_hub::player::{RankingTab, rank_players};
//!
//! let ranked = rank_players(&fixtures::players(), RankingTab::Doubles);
//! assert_eq!(ranked[0].current_rank, 1);
//! ```

pub mod divisions;
pub mod fixtures;
pub mod player;
pub mod results;
pub mod schedule;
pub mod tournament;

pub use divisions::{AgeGroup, Category, Gender, SkillLevel, Stage};
