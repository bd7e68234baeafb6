//! The results archive: finished tournaments, their match results, and the
//! winner spotlights.

use super::{date, time};
use crate::divisions::{AgeGroup, Category, Gender, Stage};
use crate::results::{MatchResult, Medal, Tier, TournamentSummary, WinnerSpotlight};
use crate::schedule::{Competitor, Score, SetScore, Side};

/// Archived tournaments, most recent season first.
pub fn tournament_archive() -> Vec<TournamentSummary> {
    vec![
        TournamentSummary {
            id: "completed-1".to_string(),
            name: "Summer Championship 2024".to_string(),
            tier: Tier::Pro,
            location: "Los Angeles, CA".to_string(),
            start_date: date(2024, 8, 15),
            end_date: date(2024, 8, 18),
            year: 2024,
            total_prize_money: Some(50_000),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            organizer: "USA Pickleball".to_string(),
            venue: "Central Sports Complex".to_string(),
        },
        TournamentSummary {
            id: "completed-2".to_string(),
            name: "Regional Open Championship".to_string(),
            tier: Tier::Regional,
            location: "Phoenix, AZ".to_string(),
            start_date: date(2024, 7, 20),
            end_date: date(2024, 7, 22),
            year: 2024,
            total_prize_money: Some(25_000),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            organizer: "Arizona Pickleball Association".to_string(),
            venue: "Phoenix Sports Center".to_string(),
        },
        TournamentSummary {
            id: "completed-3".to_string(),
            name: "State Finals 2024".to_string(),
            tier: Tier::Regional,
            location: "Miami, FL".to_string(),
            start_date: date(2024, 6, 10),
            end_date: date(2024, 6, 12),
            year: 2024,
            total_prize_money: Some(15_000),
            categories: vec![Category::Singles, Category::Doubles],
            organizer: "Florida Pickleball Federation".to_string(),
            venue: "Metro Tennis Club".to_string(),
        },
        TournamentSummary {
            id: "completed-4".to_string(),
            name: "Spring Championship 2024".to_string(),
            tier: Tier::Pro,
            location: "Denver, CO".to_string(),
            start_date: date(2024, 5, 5),
            end_date: date(2024, 5, 8),
            year: 2024,
            total_prize_money: Some(40_000),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            organizer: "Mountain Pickleball League".to_string(),
            venue: "Rocky Mountain Sports Complex".to_string(),
        },
        TournamentSummary {
            id: "completed-5".to_string(),
            name: "National Championships 2023".to_string(),
            tier: Tier::Pro,
            location: "Austin, TX".to_string(),
            start_date: date(2023, 11, 15),
            end_date: date(2023, 11, 18),
            year: 2023,
            total_prize_money: Some(75_000),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            organizer: "USA Pickleball".to_string(),
            venue: "Austin Convention Center".to_string(),
        },
        TournamentSummary {
            id: "completed-6".to_string(),
            name: "West Coast Open 2023".to_string(),
            tier: Tier::Regional,
            location: "Seattle, WA".to_string(),
            start_date: date(2023, 9, 10),
            end_date: date(2023, 9, 12),
            year: 2023,
            total_prize_money: Some(20_000),
            categories: vec![Category::Singles, Category::Doubles],
            organizer: "Pacific Northwest Pickleball".to_string(),
            venue: "Seattle Sports Arena".to_string(),
        },
    ]
}

/// Finished matches across the archive.
pub fn match_results() -> Vec<MatchResult> {
    vec![
        MatchResult {
            id: "result-1".to_string(),
            tournament_id: "completed-1".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category: Category::Singles,
            gender: Gender::Women,
            age_group: AgeGroup::Open19,
            stage: Stage::Final,
            side_a: Competitor::seeded("p1", "Sarah Johnson", 1),
            side_b: Competitor::seeded("p2", "Jennifer Chen", 3),
            winner: Side::A,
            score: Score::new(
                2,
                1,
                vec![
                    SetScore::new(11, 7),
                    SetScore::new(9, 11),
                    SetScore::new(11, 6),
                ],
            ),
            date: date(2024, 8, 18),
            time: time(15, 0),
            duration_mins: 85,
            venue: "Central Sports Complex".to_string(),
            court: "Center Court".to_string(),
            referee: Some("Mike Thompson".to_string()),
            attendance: Some(1200),
        },
        MatchResult {
            id: "result-2".to_string(),
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
            date: date(2024, 8, 18),
            time: time(16, 30),
            duration_mins: 92,
            venue: "Central Sports Complex".to_string(),
            court: "Center Court".to_string(),
            referee: Some("Lisa Martinez".to_string()),
            attendance: None,
        },
        MatchResult {
            id: "result-3".to_string(),
            tournament_id: "completed-1".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category: Category::Doubles,
            gender: Gender::Mixed,
            age_group: AgeGroup::Open19,
            stage: Stage::Final,
            side_a: Competitor::seeded("p5", "Maria & Carlos Gonzalez", 1),
            side_b: Competitor::seeded("p6", "Rachel & Steve Miller", 2),
            winner: Side::A,
            score: Score::new(2, 0, vec![SetScore::new(11, 8), SetScore::new(11, 9)]),
            date: date(2024, 8, 18),
            time: time(14, 0),
            duration_mins: 68,
            venue: "Central Sports Complex".to_string(),
            court: "Court 1".to_string(),
            referee: Some("John Wilson".to_string()),
            attendance: None,
        },
        MatchResult {
            id: "result-4".to_string(),
            tournament_id: "completed-1".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category: Category::Singles,
            gender: Gender::Women,
            age_group: AgeGroup::Open19,
            stage: Stage::Semifinal,
            side_a: Competitor::seeded("p1", "Sarah Johnson", 1),
            side_b: Competitor::seeded("p7", "Lisa Martinez", 4),
            winner: Side::A,
            score: Score::new(2, 0, vec![SetScore::new(11, 6), SetScore::new(11, 8)]),
            date: date(2024, 8, 17),
            time: time(15, 0),
            duration_mins: 55,
            venue: "Central Sports Complex".to_string(),
            court: "Court 2".to_string(),
            referee: None,
            attendance: None,
        },
        MatchResult {
            id: "result-5".to_string(),
            tournament_id: "completed-1".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category: Category::Singles,
            gender: Gender::Women,
            age_group: AgeGroup::Open19,
            stage: Stage::Semifinal,
            side_a: Competitor::seeded("p2", "Jennifer Chen", 3),
            side_b: Competitor::seeded("p8", "Amanda Wilson", 2),
            winner: Side::A,
            score: Score::new(
                2,
                1,
                vec![
                    SetScore::new(8, 11),
                    SetScore::new(11, 7),
                    SetScore::new(11, 9),
                ],
            ),
            date: date(2024, 8, 17),
            time: time(16, 30),
            duration_mins: 78,
            venue: "Central Sports Complex".to_string(),
            court: "Court 2".to_string(),
            referee: None,
            attendance: None,
        },
        MatchResult {
            id: "result-6".to_string(),
            tournament_id: "completed-2".to_string(),
            tournament_name: "Regional Open Championship".to_string(),
            category: Category::Doubles,
            gender: Gender::Men,
            age_group: AgeGroup::Senior35,
            stage: Stage::Final,
            side_a: Competitor::seeded("p9", "Paul & Gary Moore", 1),
            side_b: Competitor::seeded("p10", "Tom & Mark Anderson", 3),
            winner: Side::A,
            score: Score::new(
                2,
                1,
                vec![
                    SetScore::new(11, 9),
                    SetScore::new(9, 11),
                    SetScore::new(11, 7),
                ],
            ),
            date: date(2024, 7, 22),
            time: time(17, 0),
            duration_mins: 95,
            venue: "Phoenix Sports Center".to_string(),
            court: "Championship Court".to_string(),
            referee: Some("Robert Davis".to_string()),
            attendance: None,
        },
        MatchResult {
            id: "result-7".to_string(),
            tournament_id: "completed-3".to_string(),
            tournament_name: "State Finals 2024".to_string(),
            category: Category::Singles,
            gender: Gender::Men,
            age_group: AgeGroup::Senior50,
            stage: Stage::Final,
            side_a: Competitor::seeded("p11", "Frank Harrison", 2),
            side_b: Competitor::seeded("p12", "William Brown", 1),
            winner: Side::A,
            score: Score::new(2, 0, vec![SetScore::new(11, 8), SetScore::new(11, 9)]),
            date: date(2024, 6, 12),
            time: time(16, 0),
            duration_mins: 72,
            venue: "Metro Tennis Club".to_string(),
            court: "Center Court".to_string(),
            referee: None,
            attendance: None,
        },
        MatchResult {
            id: "result-8".to_string(),
            tournament_id: "completed-5".to_string(),
            tournament_name: "National Championships 2023".to_string(),
            category: Category::Singles,
            gender: Gender::Women,
            age_group: AgeGroup::Open19,
            stage: Stage::Final,
            side_a: Competitor::seeded("p13", "Emma Davis", 1),
            side_b: Competitor::seeded("p14", "Jessica Brown", 2),
            winner: Side::A,
            score: Score::new(
                2,
                1,
                vec![
                    SetScore::new(11, 6),
                    SetScore::new(9, 11),
                    SetScore::new(11, 8),
                ],
            ),
            date: date(2023, 11, 18),
            time: time(15, 30),
            duration_mins: 88,
            venue: "Austin Convention Center".to_string(),
            court: "Championship Court".to_string(),
            referee: Some("Sarah Thompson".to_string()),
            attendance: None,
        },
    ]
}

/// Champion summaries for the spotlight strip.
pub fn spotlights() -> Vec<WinnerSpotlight> {
    vec![
        WinnerSpotlight {
            player_id: "p1".to_string(),
            player_name: "Sarah Johnson".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category_label: "Women's Singles".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(12_000),
            date: date(2024, 8, 18),
            medal: Medal::Gold,
        },
        WinnerSpotlight {
            player_id: "p4".to_string(),
            player_name: "David Kim".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category_label: "Men's Singles".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(12_000),
            date: date(2024, 8, 18),
            medal: Medal::Gold,
        },
        WinnerSpotlight {
            player_id: "p5".to_string(),
            player_name: "Maria & Carlos Gonzalez".to_string(),
            tournament_name: "Summer Championship 2024".to_string(),
            category_label: "Mixed Doubles".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(8_000),
            date: date(2024, 8, 18),
            medal: Medal::Gold,
        },
        WinnerSpotlight {
            player_id: "p9".to_string(),
            player_name: "Paul & Gary Moore".to_string(),
            tournament_name: "Regional Open Championship".to_string(),
            category_label: "Men's Doubles 35+".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(5_000),
            date: date(2024, 7, 22),
            medal: Medal::Gold,
        },
        WinnerSpotlight {
            player_id: "p11".to_string(),
            player_name: "Frank Harrison".to_string(),
            tournament_name: "State Finals 2024".to_string(),
            category_label: "Men's Singles 50+".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(3_000),
            date: date(2024, 6, 12),
            medal: Medal::Gold,
        },
        WinnerSpotlight {
            player_id: "p13".to_string(),
            player_name: "Emma Davis".to_string(),
            tournament_name: "National Championships 2023".to_string(),
            category_label: "Women's Singles".to_string(),
            achievement: "Champion".to_string(),
            prize_money: Some(15_000),
            date: date(2023, 11, 18),
            medal: Medal::Gold,
        },
    ]
}
