//! Results archive records: finished tournaments, match results, and the
//! winner spotlight summaries.

use crate::divisions::{AgeGroup, Category, Gender, Stage};
use crate::player::PlayerId;
use crate::schedule::{Competitor, Score, Side};
use crate::tournament::{TournamentId, Usd};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sanctioning tier of an archived tournament.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Tier {
    Pro,
    Regional,
    Local,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Pro => "Pro",
            Self::Regional => "Regional",
            Self::Local => "Local",
        };
        write!(f, "{repr}")
    }
}

/// Spotlight medal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Bronze => "Bronze",
        };
        write!(f, "{repr}")
    }
}

/// An archived (completed) tournament.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub tier: Tier,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub year: i32,
    pub total_prize_money: Option<Usd>,
    pub categories: Vec<Category>,
    pub organizer: String,
    pub venue: String,
}

/// A finished match with its final score. Unlike [`crate::schedule::Match`],
/// the winner and score are mandatory here.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatchResult {
    pub id: String,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub category: Category,
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub stage: Stage,
    pub side_a: Competitor,
    pub side_b: Competitor,
    pub winner: Side,
    pub score: Score,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_mins: u32,
    pub venue: String,
    pub court: String,
    pub referee: Option<String>,
    pub attendance: Option<u32>,
}

impl MatchResult {
    pub fn competitor(&self, side: Side) -> &Competitor {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    pub fn winner_name(&self) -> &str {
        &self.competitor(self.winner).name
    }

    pub fn loser_name(&self) -> &str {
        &self.competitor(self.winner.other()).name
    }

    /// "Sarah Johnson vs Jennifer Chen"
    pub fn billing(&self) -> String {
        format!("{} vs {}", self.side_a.name, self.side_b.name)
    }
}

/// Denormalized champion summary for the spotlight strip. Display only.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WinnerSpotlight {
    pub player_id: PlayerId,
    pub player_name: String,
    pub tournament_name: String,
    /// Free-form bracket label, e.g. "Men's Singles 50+".
    pub category_label: String,
    /// "Champion", "Runner-up", "Semifinalist".
    pub achievement: String,
    pub prize_money: Option<Usd>,
    pub date: NaiveDate,
    pub medal: Medal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::SetScore;

    #[test]
    fn test_winner_and_loser_names() {
        let result = MatchResult {
            id: "r1".to_string(),
            tournament_id: "completed-1".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category: Category::Singles,
            gender: Gender::Men,
            age_group: AgeGroup::Open19,
            stage: Stage::Final,
            side_a: Competitor::seeded("p3", "Mike Rodriguez", 2),
            side_b: Competitor::seeded("p4", "David Kim", 1),
            winner: Side::B,
            score: Score::new(
                1,
                2,
                vec![
                    SetScore::new(11, 9),
                    SetScore::new(8, 11),
                    SetScore::new(7, 11),
                ],
            ),
            date: NaiveDate::from_ymd_opt(2024, 8, 18).unwrap(),
            time: NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
            duration_mins: 92,
            venue: "Central Sports Complex".to_string(),
            court: "Center Court".to_string(),
            referee: None,
            attendance: None,
        };
        assert_eq!(result.winner_name(), "David Kim");
        assert_eq!(result.loser_name(), "Mike Rodriguez");
    }
}
