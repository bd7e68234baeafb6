//! Match records for the schedule.

use crate::divisions::{AgeGroup, Category, Gender, Stage};
use crate::player::PlayerId;
use crate::tournament::TournamentId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Match ID type
pub type MatchId = String;

/// Lifecycle status of a scheduled match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Scheduled => "Scheduled",
            Self::Live => "Live",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        };
        write!(f, "{repr}")
    }
}

/// One of the two competitor slots of a match. A winner reference is a
/// `Side`, so it can only name a slot that exists.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A competitor slot: a player or, in doubles, a named pair.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Competitor {
    pub id: PlayerId,
    pub name: String,
    pub seed: Option<u32>,
}

impl Competitor {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            seed: None,
        }
    }

    pub fn seeded(id: &str, name: &str, seed: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            seed: Some(seed),
        }
    }
}

/// Points for one set.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetScore {
    pub side_a: u32,
    pub side_b: u32,
}

impl SetScore {
    pub fn new(side_a: u32, side_b: u32) -> Self {
        Self { side_a, side_b }
    }
}

/// Full score: set totals plus the per-set breakdown.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Score {
    pub sets_a: u32,
    pub sets_b: u32,
    pub sets: Vec<SetScore>,
}

impl Score {
    pub fn new(sets_a: u32, sets_b: u32, sets: Vec<SetScore>) -> Self {
        Self { sets_a, sets_b, sets }
    }
}

/// In-progress score for a live match.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LiveScore {
    /// 1-based set number currently in play.
    pub current_set: u32,
    pub side_a: u32,
    pub side_b: u32,
    pub serving: Side,
}

/// A scheduled, live, or finished match.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub side_a: Competitor,
    pub side_b: Competitor,
    pub category: Category,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub stage: Stage,
    pub venue: String,
    pub court: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: MatchStatus,
    pub score: Option<Score>,
    pub winner: Option<Side>,
    pub duration_mins: Option<u32>,
    pub live: Option<LiveScore>,
}

impl Match {
    pub fn competitor(&self, side: Side) -> &Competitor {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Winner's display name, when the match has one.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| self.competitor(side).name.as_str())
    }

    /// "Sarah Johnson vs Jennifer Chen"
    pub fn billing(&self) -> String {
        format!("{} vs {}", self.side_a.name, self.side_b.name)
    }
}
