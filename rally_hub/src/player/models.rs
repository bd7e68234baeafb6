//! Player records and profile fallbacks.

use crate::divisions::{AgeGroup, Category, Gender};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = String;

/// One line of a player's tournament history.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub tournament_name: String,
    pub date: NaiveDate,
    /// Free-form placement label ("Champion", "Semifinalist", ...).
    pub result: String,
    pub category: Category,
    pub location: String,
}

/// Social handles. All optional; profiles commonly carry none.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Socials {
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

/// A ranked player.
///
/// `current_rank` is the stored overall position. Ranking views recompute
/// display ranks from points for whatever subset is on screen (see
/// [`crate::player::rankings`]); the stored value is never rewritten.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub city: String,
    pub region: String,
    pub category: Category,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub current_rank: u32,
    pub points: u32,
    /// Positions gained (positive) or lost since the last ranking update.
    pub rank_change: i32,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
    pub bio: Option<String>,
    pub age: Option<u32>,
    pub verified: Option<bool>,
    pub recent_highlight: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub tournament_history: Vec<HistoryEntry>,
    #[serde(default)]
    pub socials: Socials,
    pub playing_since: Option<i32>,
}

impl Player {
    /// Win rate as a whole percentage. Defined once for the whole crate:
    /// a player with no matches played is at 0%.
    pub fn win_rate_percent(&self) -> u32 {
        if self.matches_played == 0 {
            return 0;
        }
        let rate = f64::from(self.wins) / f64::from(self.matches_played) * 100.0;
        rate.round() as u32
    }

    /// Profile bio, falling back to placeholder copy.
    pub fn bio(&self) -> &str {
        self.bio
            .as_deref()
            .unwrap_or("Dedicated pickleball player competing at the highest level.")
    }

    pub fn age(&self) -> u32 {
        self.age.unwrap_or(30)
    }

    /// Verified badge. Unset profiles inherit it from a top-ten rank.
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(self.current_rank <= 10)
    }

    pub fn recent_highlight(&self) -> &str {
        self.recent_highlight.as_deref().unwrap_or("Active competitor")
    }

    pub fn playing_since(&self) -> i32 {
        self.playing_since.unwrap_or(2020)
    }

    /// Initials used for avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphabetic())
            .collect()
    }
}
