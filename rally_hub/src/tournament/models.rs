//! Tournament catalog records.

use crate::divisions::{Category, SkillLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tournament ID type
pub type TournamentId = String;

/// Whole-dollar amounts (entry fees, prize money).
pub type Usd = u32;

/// Registration window used by the "closing soon" filter, in days.
pub const CLOSING_SOON_DAYS: i64 = 7;

/// A browsable tournament listing.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// City and state, e.g. "Los Angeles, CA".
    pub location: String,
    /// Categories contested at the event.
    pub categories: Vec<Category>,
    pub skill_level: SkillLevel,
    /// Open spots remaining. Fixture invariant: `spots_left <= total_spots`.
    pub spots_left: u32,
    pub total_spots: u32,
    pub entry_fee: Usd,
    pub registration_deadline: NaiveDate,
    pub registration_open: bool,
    pub organizer: String,
}

impl Tournament {
    /// Whether every spot is taken.
    pub fn is_full(&self) -> bool {
        self.spots_left == 0
    }

    /// Spots already claimed.
    pub fn spots_taken(&self) -> u32 {
        self.total_spots.saturating_sub(self.spots_left)
    }

    /// Signed day count until the registration deadline.
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.registration_deadline - today).num_days()
    }

    /// Still open, with the deadline within [`CLOSING_SOON_DAYS`].
    pub fn is_closing_soon(&self, today: NaiveDate) -> bool {
        self.registration_open && self.days_until_deadline(today) <= CLOSING_SOON_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(spots_left: u32, open: bool, deadline: NaiveDate) -> Tournament {
        Tournament {
            id: "t1".to_string(),
            name: "Test Open".to_string(),
            start_date: deadline,
            end_date: deadline,
            location: "Austin, TX".to_string(),
            categories: vec![Category::Singles],
            skill_level: SkillLevel::Intermediate,
            spots_left,
            total_spots: 32,
            entry_fee: 75,
            registration_deadline: deadline,
            registration_open: open,
            organizer: "Texas Pickleball".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_spots_taken() {
        let t = tournament(12, true, date(2024, 9, 1));
        assert_eq!(t.spots_taken(), 20);
        assert!(!t.is_full());
        assert!(tournament(0, true, date(2024, 9, 1)).is_full());
    }

    #[test]
    fn test_serde_round_trip() {
        let t = tournament(12, true, date(2024, 9, 28));
        let json = serde_json::to_string(&t).unwrap();
        let back: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, t.id);
        assert_eq!(back.entry_fee, t.entry_fee);
        assert_eq!(back.registration_deadline, t.registration_deadline);
    }

    #[test]
    fn test_closing_soon_window() {
        let today = date(2024, 9, 1);
        // Deadline a week out is closing soon, two weeks out is not.
        assert!(tournament(5, true, date(2024, 9, 8)).is_closing_soon(today));
        assert!(!tournament(5, true, date(2024, 9, 15)).is_closing_soon(today));
        // A lapsed deadline still counts while the listing says open.
        assert!(tournament(5, true, date(2024, 8, 20)).is_closing_soon(today));
        // Closed registration is never closing soon.
        assert!(!tournament(5, false, date(2024, 9, 8)).is_closing_soon(today));
    }
}
