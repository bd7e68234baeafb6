//! Player catalog: records, the directory pipeline, and leaderboard
//! re-ranking.

pub mod directory;
pub mod models;
pub mod rankings;

pub use directory::{
    DirectorySort, DirectoryStats, PlayerFilters, RankTier, SortDirection, SortField,
    directory_stats, top_players, verified_count,
};
pub use models::{HistoryEntry, Player, PlayerId, Socials};
pub use rankings::{RankingTab, rank_players, tab_count};
