//! The player roster.

use super::date;
use crate::divisions::{AgeGroup, Category, Gender};
use crate::player::{HistoryEntry, Player, Socials};

fn player(
    id: &str,
    name: &str,
    city: &str,
    region: &str,
    category: Category,
    gender: Gender,
    age_group: AgeGroup,
    current_rank: u32,
    points: u32,
    rank_change: i32,
    wins: u32,
    losses: u32,
) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        category,
        gender,
        age_group,
        current_rank,
        points,
        rank_change,
        wins,
        losses,
        matches_played: wins + losses,
        bio: None,
        age: None,
        verified: None,
        recent_highlight: None,
        achievements: Vec::new(),
        tournament_history: Vec::new(),
        socials: Socials::default(),
        playing_since: None,
    }
}

/// The player roster. A few profiles are fully filled in; the rest lean on
/// the render-time fallbacks.
pub fn players() -> Vec<Player> {
    let mut roster = vec![
        Player {
            bio: Some(
                "Former collegiate tennis player who picked up a paddle in 2016 \
                 and never looked back. Known for relentless third-shot drops."
                    .to_string(),
            ),
            age: Some(27),
            verified: Some(true),
            recent_highlight: Some("Won 2024 Summer Championship".to_string()),
            achievements: vec![
                "2024 Summer Championship — Champion".to_string(),
                "2023 National Championships — Semifinalist".to_string(),
                "2023 West Coast Open — Champion".to_string(),
            ],
            tournament_history: vec![
                HistoryEntry {
                    tournament_name: "Summer Championship 2024".to_string(),
                    date: date(2024, 8, 18),
                    result: "Champion".to_string(),
                    category: Category::Singles,
                    location: "Los Angeles, CA".to_string(),
                },
                HistoryEntry {
                    tournament_name: "Spring Championship 2024".to_string(),
                    date: date(2024, 5, 8),
                    result: "Semifinalist".to_string(),
                    category: Category::Singles,
                    location: "Denver, CO".to_string(),
                },
            ],
            socials: Socials {
                instagram: Some("@sarahj_pickle".to_string()),
                twitter: None,
                facebook: None,
            },
            playing_since: Some(2016),
            ..player(
                "p1",
                "Sarah Johnson",
                "Los Angeles",
                "CA",
                Category::Singles,
                Gender::Women,
                AgeGroup::Open19,
                1,
                2840,
                2,
                48,
                9,
            )
        },
        Player {
            recent_highlight: Some("Runner-up, Summer Championship".to_string()),
            ..player(
                "p2",
                "Jennifer Chen",
                "San Francisco",
                "CA",
                Category::Singles,
                Gender::Women,
                AgeGroup::Open19,
                2,
                2615,
                -1,
                41,
                12,
            )
        },
        Player {
            age: Some(29),
            verified: Some(true),
            recent_highlight: Some("Won Men's Singles at Summer Championship".to_string()),
            playing_since: Some(2018),
            ..player(
                "p4",
                "David Kim",
                "Seattle",
                "WA",
                Category::Singles,
                Gender::Men,
                AgeGroup::Open19,
                3,
                2590,
                1,
                44,
                13,
            )
        },
        player(
            "p3",
            "Mike Rodriguez",
            "Phoenix",
            "AZ",
            Category::Singles,
            Gender::Men,
            AgeGroup::Open19,
            4,
            2410,
            -2,
            39,
            15,
        ),
        Player {
            recent_highlight: Some("Won Regional Open doubles".to_string()),
            ..player(
                "p9",
                "Paul Moore",
                "Phoenix",
                "AZ",
                Category::Doubles,
                Gender::Men,
                AgeGroup::Senior35,
                5,
                2275,
                3,
                36,
                14,
            )
        },
        player(
            "p5",
            "Maria Gonzalez",
            "Miami",
            "FL",
            Category::Mixed,
            Gender::Women,
            AgeGroup::Open19,
            6,
            2140,
            0,
            33,
            15,
        ),
        player(
            "p6",
            "Carlos Gonzalez",
            "Miami",
            "FL",
            Category::Mixed,
            Gender::Men,
            AgeGroup::Open19,
            7,
            2080,
            1,
            31,
            16,
        ),
        player(
            "p7",
            "Lisa Martinez",
            "Houston",
            "TX",
            Category::Singles,
            Gender::Women,
            AgeGroup::Senior35,
            8,
            1960,
            -1,
            28,
            17,
        ),
        player(
            "p8",
            "Amanda Wilson",
            "Chicago",
            "IL",
            Category::Singles,
            Gender::Women,
            AgeGroup::Open19,
            9,
            1835,
            4,
            26,
            15,
        ),
        Player {
            age: Some(56),
            recent_highlight: Some("Won State Finals 50+".to_string()),
            playing_since: Some(2012),
            ..player(
                "p11",
                "Frank Harrison",
                "Austin",
                "TX",
                Category::Singles,
                Gender::Men,
                AgeGroup::Senior50,
                10,
                1720,
                0,
                24,
                13,
            )
        },
        player(
            "p12",
            "Helen Jackson",
            "Denver",
            "CO",
            Category::Doubles,
            Gender::Women,
            AgeGroup::Senior50,
            11,
            1610,
            1,
            22,
            16,
        ),
        player(
            "p10",
            "Gary Moore",
            "Phoenix",
            "AZ",
            Category::Doubles,
            Gender::Men,
            AgeGroup::Senior35,
            12,
            1540,
            -3,
            21,
            18,
        ),
        // Fresh entrant: no matches on record yet.
        player(
            "p14",
            "Noah Patel",
            "New York",
            "NY",
            Category::Doubles,
            Gender::Men,
            AgeGroup::Open19,
            138,
            45,
            0,
            0,
            0,
        ),
    ];
    // Keep the directory's default order stable: stored rank ascending.
    roster.sort_by_key(|p| p.current_rank);
    roster
}
