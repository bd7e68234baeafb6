//! Match schedule: records, the browsing pipeline, and day grouping.

pub mod browse;
pub mod models;

pub use browse::{
    DayGroup, ScheduleFilters, ScheduleTab, StatusCounts, day_label, group_by_date, live_matches,
};
pub use models::{Competitor, LiveScore, Match, MatchId, MatchStatus, Score, SetScore, Side};
