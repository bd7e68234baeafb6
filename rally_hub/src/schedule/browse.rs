//! Schedule browsing: status tabs, field filters, day grouping, and the
//! relative day labels used for group headers.

use super::models::{Match, MatchStatus};
use crate::divisions::{AgeGroup, Category, Gender};
use chrono::{Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Status tab over the schedule.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ScheduleTab {
    #[default]
    All,
    Today,
    Upcoming,
    Completed,
}

impl ScheduleTab {
    pub const ALL: [ScheduleTab; 4] = [
        ScheduleTab::All,
        ScheduleTab::Today,
        ScheduleTab::Upcoming,
        ScheduleTab::Completed,
    ];

    fn admits(self, m: &Match, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => m.date == today,
            Self::Upcoming => m.status == MatchStatus::Scheduled && m.date >= today,
            Self::Completed => m.status == MatchStatus::Completed,
        }
    }
}

impl fmt::Display for ScheduleTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for ScheduleTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("not a schedule tab: '{s}'")),
        }
    }
}

/// Filter state for the schedule page. [`Default`] is the reset state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ScheduleFilters {
    pub tab: ScheduleTab,
    /// Exact tournament name.
    pub tournament: Option<String>,
    pub category: Option<Category>,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    /// Calendar day equality.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring over both competitor names, the
    /// tournament name, and the venue.
    pub search: String,
}

impl ScheduleFilters {
    pub fn matches(&self, m: &Match, today: NaiveDate) -> bool {
        if !self.tab.admits(m, today) {
            return false;
        }
        if let Some(tournament) = &self.tournament
            && m.tournament_name != *tournament
        {
            return false;
        }
        if let Some(category) = self.category
            && m.category != category
        {
            return false;
        }
        if let Some(gender) = self.gender
            && m.gender != gender
        {
            return false;
        }
        if let Some(age_group) = self.age_group
            && m.age_group != age_group
        {
            return false;
        }
        if let Some(date) = self.date
            && m.date != date
        {
            return false;
        }
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let hit = m.side_a.name.to_lowercase().contains(&query)
                || m.side_b.name.to_lowercase().contains(&query)
                || m.tournament_name.to_lowercase().contains(&query)
                || m.venue.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Run the pipeline. Output is ascending by (date, time).
    pub fn apply(&self, matches: &[Match], today: NaiveDate) -> Vec<Match> {
        let mut filtered: Vec<Match> = matches
            .iter()
            .filter(|m| self.matches(m, today))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        debug!(
            "schedule filter pass: {} of {} matches",
            filtered.len(),
            matches.len()
        );
        filtered
    }

    /// Engaged constraints; the tab and search query are reported
    /// separately by the UI.
    pub fn active_count(&self) -> usize {
        [
            self.tournament.is_some(),
            self.category.is_some(),
            self.gender.is_some(),
            self.age_group.is_some(),
            self.date.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Live/scheduled/completed tallies for one day group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StatusCounts {
    pub live: usize,
    pub scheduled: usize,
    pub completed: usize,
}

/// One day of the schedule, matches in time order.
#[derive(Clone, Debug)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub matches: Vec<Match>,
}

impl DayGroup {
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for m in &self.matches {
            match m.status {
                MatchStatus::Live => counts.live += 1,
                MatchStatus::Scheduled => counts.scheduled += 1,
                MatchStatus::Completed => counts.completed += 1,
                MatchStatus::Cancelled => {}
            }
        }
        counts
    }
}

/// Group an already-sorted match list by day, preserving time order
/// within each group.
pub fn group_by_date(matches: Vec<Match>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for m in matches {
        match groups.last_mut() {
            Some(group) if group.date == m.date => group.matches.push(m),
            _ => groups.push(DayGroup {
                date: m.date,
                matches: vec![m],
            }),
        }
    }
    groups
}

/// Header label for a day group: Today/Tomorrow/Yesterday relative to
/// `today`, otherwise the long-form date.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.checked_add_days(Days::new(1)) {
        "Tomorrow".to_string()
    } else if Some(date) == today.checked_sub_days(Days::new(1)) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Matches currently in play, for the live banner.
pub fn live_matches(matches: &[Match]) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| m.status == MatchStatus::Live)
        .cloned()
        .collect()
}
