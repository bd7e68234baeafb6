//! Static catalog data standing in for a backend.
//!
//! Every function builds its records on call; nothing here is global
//! state. The schedule and its relative-day labels are anchored on
//! 2024-09-20 — tests that exercise today/upcoming behavior pass that
//! date in as `today`.

mod matches;
mod players;
mod results;
mod tournaments;

pub use matches::matches;
pub use players::players;
pub use results::{match_results, spotlights, tournament_archive};
pub use tournaments::tournaments;

use chrono::{NaiveDate, NaiveTime};

/// The day the fixture schedule is anchored on.
pub fn schedule_anchor() -> NaiveDate {
    date(2024, 9, 20)
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

pub(crate) fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("fixture times are valid")
}
