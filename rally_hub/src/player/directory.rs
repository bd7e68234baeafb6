//! Player directory: filters, sortable columns, and the quick-stat tiles.

use super::models::Player;
use crate::divisions::{AgeGroup, Category, Gender};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// Stored-rank tier constraint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RankTier {
    Top10,
    Top25,
    Top50,
    Top100,
    /// Outside the top 100.
    Unranked,
}

impl RankTier {
    fn admits(self, rank: u32) -> bool {
        match self {
            Self::Top10 => rank <= 10,
            Self::Top25 => rank <= 25,
            Self::Top50 => rank <= 50,
            Self::Top100 => rank <= 100,
            Self::Unranked => rank > 100,
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Top10 => "Top 10",
            Self::Top25 => "Top 25",
            Self::Top50 => "Top 50",
            Self::Top100 => "Top 100",
            Self::Unranked => "Unranked",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for RankTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "").as_str() {
            "top10" | "10" => Ok(Self::Top10),
            "top25" | "25" => Ok(Self::Top25),
            "top50" | "50" => Ok(Self::Top50),
            "top100" | "100" => Ok(Self::Top100),
            "unranked" => Ok(Self::Unranked),
            _ => Err(format!("not a rank tier: '{s}'")),
        }
    }
}

/// Filter state for the player directory. [`Default`] is the reset state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PlayerFilters {
    /// Case-insensitive substring over name, city, region, and id.
    pub search: String,
    pub category: Option<Category>,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    /// Exact region match ("CA").
    pub region: Option<String>,
    pub rank_tier: Option<RankTier>,
}

impl PlayerFilters {
    pub fn matches(&self, player: &Player) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let hit = player.name.to_lowercase().contains(&query)
                || player.city.to_lowercase().contains(&query)
                || player.region.to_lowercase().contains(&query)
                || player.id.contains(&query);
            if !hit {
                return false;
            }
        }
        if let Some(category) = self.category
            && player.category != category
        {
            return false;
        }
        if let Some(gender) = self.gender
            && player.gender != gender
        {
            return false;
        }
        if let Some(age_group) = self.age_group
            && player.age_group != age_group
        {
            return false;
        }
        if let Some(region) = &self.region
            && player.region != *region
        {
            return false;
        }
        if let Some(tier) = self.rank_tier
            && !tier.admits(player.current_rank)
        {
            return false;
        }
        true
    }

    /// Run the pipeline. Without a sort the directory keeps catalog order.
    pub fn apply(&self, players: &[Player], sort: Option<DirectorySort>) -> Vec<Player> {
        let mut filtered: Vec<Player> = players
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        if let Some(sort) = sort {
            sort.apply(&mut filtered);
        }
        debug!(
            "player filter pass: {} of {} players",
            filtered.len(),
            players.len()
        );
        filtered
    }

    pub fn active_count(&self) -> usize {
        [
            self.category.is_some(),
            self.gender.is_some(),
            self.age_group.is_some(),
            self.region.is_some(),
            self.rank_tier.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Sortable directory column.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortField {
    Points,
    WinRate,
    MatchesPlayed,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Points => "points",
            Self::WinRate => "win rate",
            Self::MatchesPlayed => "matches",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active directory sort: a column plus a direction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DirectorySort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl DirectorySort {
    /// Column-header selection semantics: picking the active column flips
    /// its direction, picking a new column sorts it descending.
    pub fn select(current: Option<DirectorySort>, field: SortField) -> DirectorySort {
        match current {
            Some(sort) if sort.field == field => DirectorySort {
                field,
                direction: match sort.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => DirectorySort {
                field,
                direction: SortDirection::Descending,
            },
        }
    }

    fn apply(self, players: &mut [Player]) {
        let key = |p: &Player| -> u32 {
            match self.field {
                SortField::Points => p.points,
                SortField::WinRate => p.win_rate_percent(),
                SortField::MatchesPlayed => p.matches_played,
            }
        };
        players.sort_by(|a, b| {
            let ordering = key(a).cmp(&key(b));
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Quick-stat tile values for the directory header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectoryStats {
    pub total: usize,
    /// Placeholder heuristic carried from the catalog: 70% of the roster
    /// is treated as active in the last 30 days.
    pub active: usize,
    pub average_win_rate: u32,
    pub total_matches: u32,
}

pub fn directory_stats(players: &[Player]) -> DirectoryStats {
    let total = players.len();
    let average_win_rate = if total == 0 {
        0
    } else {
        let sum: u32 = players.iter().map(Player::win_rate_percent).sum();
        (f64::from(sum) / total as f64).round() as u32
    };
    DirectoryStats {
        total,
        active: total * 7 / 10,
        average_win_rate,
        total_matches: players.iter().map(|p| p.matches_played).sum(),
    }
}

/// The podium: stored ranks 1-3, in rank order.
pub fn top_players(players: &[Player]) -> Vec<Player> {
    let mut top: Vec<Player> = players
        .iter()
        .filter(|p| p.current_rank <= 3)
        .cloned()
        .collect();
    top.sort_by(|a, b| match a.current_rank.cmp(&b.current_rank) {
        Ordering::Equal => b.points.cmp(&a.points),
        ordering => ordering,
    });
    top
}

pub fn verified_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_verified()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_default_filters_are_identity() {
        let roster = fixtures::players();
        let filtered = PlayerFilters::default().apply(&roster, None);
        assert_eq!(filtered.len(), roster.len());
        // Catalog order preserved without a sort.
        assert_eq!(filtered[0].id, roster[0].id);
    }

    #[test]
    fn test_search_covers_name_and_id() {
        let roster = fixtures::players();
        let by_name = PlayerFilters {
            search: "sarah".to_string(),
            ..Default::default()
        };
        assert!(by_name.apply(&roster, None).iter().any(|p| p.name.contains("Sarah")));

        let by_id = PlayerFilters {
            search: roster[0].id.clone(),
            ..Default::default()
        };
        assert!(!by_id.apply(&roster, None).is_empty());
    }

    #[test]
    fn test_rank_tier_boundaries() {
        assert!(RankTier::Top10.admits(10));
        assert!(!RankTier::Top10.admits(11));
        assert!(RankTier::Unranked.admits(101));
        assert!(!RankTier::Unranked.admits(100));
    }

    #[test]
    fn test_sort_selection_toggles() {
        let first = DirectorySort::select(None, SortField::Points);
        assert_eq!(first.direction, SortDirection::Descending);

        let flipped = DirectorySort::select(Some(first), SortField::Points);
        assert_eq!(flipped.direction, SortDirection::Ascending);

        let switched = DirectorySort::select(Some(flipped), SortField::WinRate);
        assert_eq!(switched.field, SortField::WinRate);
        assert_eq!(switched.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_by_win_rate_descending() {
        let roster = fixtures::players();
        let sort = DirectorySort {
            field: SortField::WinRate,
            direction: SortDirection::Descending,
        };
        let sorted = PlayerFilters::default().apply(&roster, Some(sort));
        let rates: Vec<u32> = sorted.iter().map(Player::win_rate_percent).collect();
        assert!(rates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_directory_stats() {
        let roster = fixtures::players();
        let stats = directory_stats(&roster);
        assert_eq!(stats.total, roster.len());
        assert_eq!(stats.active, roster.len() * 7 / 10);
        assert!(stats.average_win_rate <= 100);
        assert_eq!(
            stats.total_matches,
            roster.iter().map(|p| p.matches_played).sum::<u32>()
        );
    }

    #[test]
    fn test_directory_stats_empty_roster() {
        let stats = directory_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_win_rate, 0);
    }

    #[test]
    fn test_top_players_in_rank_order() {
        let top = top_players(&fixtures::players());
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].current_rank, 1);
        assert_eq!(top[2].current_rank, 3);
    }
}
