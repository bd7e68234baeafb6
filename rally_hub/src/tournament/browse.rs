//! Tournament browsing: the filter-reduce pipeline behind the catalog page.

use super::models::{Tournament, Usd};
use crate::divisions::{Category, SkillLevel};
use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default entry fee slider bounds.
pub const FEE_RANGE: (Usd, Usd) = (0, 500);

/// Registration status constraint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RegistrationStatus {
    Open,
    ClosingSoon,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Open => "Open",
            Self::ClosingSoon => "Closing Soon",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "").as_str() {
            "open" => Ok(Self::Open),
            "closingsoon" | "closing" => Ok(Self::ClosingSoon),
            _ => Err(format!("not a registration status: '{s}'")),
        }
    }
}

/// Calendar window constraint on the start date.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DateWindow {
    ThisWeek,
    NextWeek,
    ThisMonth,
    NextMonth,
}

impl DateWindow {
    /// Inclusive day range of the window, anchored on `today`. Weeks run
    /// Monday through Sunday.
    pub fn bounds(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        match self {
            Self::ThisWeek => (week_start, week_start + Days::new(6)),
            Self::NextWeek => (week_start + Days::new(7), week_start + Days::new(13)),
            Self::ThisMonth => month_bounds(today.year(), today.month()),
            Self::NextMonth => {
                let (year, month) = if today.month() == 12 {
                    (today.year() + 1, 1)
                } else {
                    (today.year(), today.month() + 1)
                };
                month_bounds(year, month)
            }
        }
    }

    fn admits(self, date: NaiveDate, today: NaiveDate) -> bool {
        let (lo, hi) = self.bounds(today);
        (lo..=hi).contains(&date)
    }
}

fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month start is a valid date");
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("month start is a valid date");
    (first, next_first - Days::new(1))
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::ThisWeek => "This Week",
            Self::NextWeek => "Next Week",
            Self::ThisMonth => "This Month",
            Self::NextMonth => "Next Month",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for DateWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "").as_str() {
            "thisweek" => Ok(Self::ThisWeek),
            "nextweek" => Ok(Self::NextWeek),
            "thismonth" => Ok(Self::ThisMonth),
            "nextmonth" => Ok(Self::NextMonth),
            _ => Err(format!("not a date window: '{s}'")),
        }
    }
}

/// Filter state for the tournament catalog. Every field defaults to the
/// no-constraint sentinel; [`Default`] is the reset state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TournamentFilters {
    /// Case-insensitive substring over name, location, and organizer.
    pub search: String,
    pub date_window: Option<DateWindow>,
    /// Substring match on the location label ("Phoenix" matches "Phoenix, AZ").
    pub location: Option<String>,
    /// OR-combined within the field: any shared category admits the record.
    pub categories: Vec<Category>,
    pub skill_level: Option<SkillLevel>,
    pub registration_status: Option<RegistrationStatus>,
    /// Inclusive entry fee bounds.
    pub entry_fee: Option<(Usd, Usd)>,
}

impl TournamentFilters {
    /// Whether a single tournament passes every active constraint.
    pub fn matches(&self, tournament: &Tournament, today: NaiveDate) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let hit = tournament.name.to_lowercase().contains(&query)
                || tournament.location.to_lowercase().contains(&query)
                || tournament.organizer.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(window) = self.date_window
            && !window.admits(tournament.start_date, today)
        {
            return false;
        }

        if let Some(location) = &self.location
            && !tournament.location.contains(location.as_str())
        {
            return false;
        }

        if !self.categories.is_empty()
            && !self
                .categories
                .iter()
                .any(|category| tournament.categories.contains(category))
        {
            return false;
        }

        if let Some(skill_level) = self.skill_level
            && tournament.skill_level != skill_level
        {
            return false;
        }

        match self.registration_status {
            Some(RegistrationStatus::Open) if !tournament.registration_open => return false,
            Some(RegistrationStatus::ClosingSoon) if !tournament.is_closing_soon(today) => {
                return false;
            }
            _ => {}
        }

        if let Some((lo, hi)) = self.entry_fee
            && !(lo..=hi).contains(&tournament.entry_fee)
        {
            return false;
        }

        true
    }

    /// Run the pipeline: the subset passing every active constraint, in
    /// catalog order.
    pub fn apply(&self, tournaments: &[Tournament], today: NaiveDate) -> Vec<Tournament> {
        let filtered: Vec<Tournament> = tournaments
            .iter()
            .filter(|t| self.matches(t, today))
            .cloned()
            .collect();
        debug!(
            "tournament filter pass: {} of {} listings",
            filtered.len(),
            tournaments.len()
        );
        filtered
    }

    /// Number of engaged constraints, categories counting one each. The
    /// search query is reported separately by the UI and not counted here.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.date_window.is_some() {
            count += 1;
        }
        if self.location.is_some() {
            count += 1;
        }
        count += self.categories.len();
        if self.skill_level.is_some() {
            count += 1;
        }
        if self.registration_status.is_some() {
            count += 1;
        }
        if let Some(range) = self.entry_fee
            && range != FEE_RANGE
        {
            count += 1;
        }
        count
    }
}
