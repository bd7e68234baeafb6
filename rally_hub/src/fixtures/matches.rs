//! The match schedule, anchored on 2024-09-20.

use super::{date, time};
use crate::divisions::{AgeGroup, Category, Gender, Stage};
use crate::schedule::{Competitor, LiveScore, Match, MatchStatus, Score, SetScore, Side};

const CENTRAL: &str = "Central Sports Complex";
const PHOENIX: &str = "Phoenix Sports Center";
const METRO: &str = "Metro Tennis Club";
const COMMUNITY: &str = "Community Sports Center";

#[allow(clippy::too_many_arguments)]
fn scheduled(
    id: &str,
    tournament_id: &str,
    tournament_name: &str,
    side_a: Competitor,
    side_b: Competitor,
    category: Category,
    gender: Gender,
    age_group: AgeGroup,
    stage: Stage,
    venue: &str,
    court: &str,
    day: chrono::NaiveDate,
    at: chrono::NaiveTime,
) -> Match {
    Match {
        id: id.to_string(),
        tournament_id: tournament_id.to_string(),
        tournament_name: tournament_name.to_string(),
        side_a,
        side_b,
        category,
        gender,
        age_group,
        stage,
        venue: venue.to_string(),
        court: court.to_string(),
        date: day,
        time: at,
        status: MatchStatus::Scheduled,
        score: None,
        winner: None,
        duration_mins: None,
        live: None,
    }
}

/// The full schedule: live, upcoming, and completed matches.
pub fn matches() -> Vec<Match> {
    vec![
        // In play right now.
        Match {
            status: MatchStatus::Live,
            live: Some(LiveScore {
                current_set: 2,
                side_a: 8,
                side_b: 10,
                serving: Side::B,
            }),
            score: Some(Score::new(
                1,
                0,
                vec![SetScore::new(11, 7), SetScore::new(8, 10)],
            )),
            ..scheduled(
                "live-1",
                "1",
                "Summer Championship 2024",
                Competitor::new("p1", "Sarah Johnson"),
                Competitor::new("p2", "Jennifer Chen"),
                Category::Singles,
                Gender::Women,
                AgeGroup::Open19,
                Stage::Semifinal,
                CENTRAL,
                "Court 1",
                date(2024, 9, 20),
                time(14, 30),
            )
        },
        Match {
            status: MatchStatus::Live,
            live: Some(LiveScore {
                current_set: 1,
                side_a: 5,
                side_b: 3,
                serving: Side::A,
            }),
            score: Some(Score::new(0, 0, vec![SetScore::new(5, 3)])),
            ..scheduled(
                "live-2",
                "1",
                "Summer Championship 2024",
                Competitor::new("p3", "Mike Rodriguez & David Kim"),
                Competitor::new("p4", "Tom Anderson & Mark Johnson"),
                Category::Doubles,
                Gender::Men,
                AgeGroup::Open19,
                Stage::Final,
                CENTRAL,
                "Court 2",
                date(2024, 9, 20),
                time(16, 0),
            )
        },
        // Later today.
        scheduled(
            "today-1",
            "1",
            "Summer Championship 2024",
            Competitor::new("p5", "Lisa Martinez"),
            Competitor::new("p6", "Amanda Wilson"),
            Category::Singles,
            Gender::Women,
            AgeGroup::Senior35,
            Stage::Quarterfinal,
            CENTRAL,
            "Court 3",
            date(2024, 9, 20),
            time(18, 0),
        ),
        scheduled(
            "today-2",
            "2",
            "Regional Open",
            Competitor::new("p7", "Maria & Carlos Gonzalez"),
            Competitor::new("p8", "Rachel & Steve Miller"),
            Category::Doubles,
            Gender::Mixed,
            AgeGroup::Open19,
            Stage::Semifinal,
            PHOENIX,
            "Court 1",
            date(2024, 9, 20),
            time(19, 30),
        ),
        // Tomorrow.
        scheduled(
            "tomorrow-1",
            "1",
            "Summer Championship 2024",
            Competitor::new("p9", "Robert Thompson"),
            Competitor::new("p10", "James Parker"),
            Category::Singles,
            Gender::Men,
            AgeGroup::Senior35,
            Stage::Final,
            CENTRAL,
            "Court 1",
            date(2024, 9, 21),
            time(10, 0),
        ),
        scheduled(
            "tomorrow-2",
            "2",
            "Regional Open",
            Competitor::new("p11", "Kate & Michelle Taylor"),
            Competitor::new("p12", "Anna & Linda White"),
            Category::Doubles,
            Gender::Women,
            AgeGroup::Open19,
            Stage::Final,
            PHOENIX,
            "Court 2",
            date(2024, 9, 21),
            time(14, 0),
        ),
        scheduled(
            "tomorrow-3",
            "3",
            "State Finals",
            Competitor::new("p13", "Frank Harrison"),
            Competitor::new("p14", "William Brown"),
            Category::Singles,
            Gender::Men,
            AgeGroup::Senior50,
            Stage::Semifinal,
            METRO,
            "Court 1",
            date(2024, 9, 21),
            time(16, 30),
        ),
        // Further out.
        scheduled(
            "future-1",
            "3",
            "State Finals",
            Competitor::new("p15", "Susan Williams"),
            Competitor::new("p16", "Helen Jackson"),
            Category::Singles,
            Gender::Women,
            AgeGroup::Senior50,
            Stage::Final,
            METRO,
            "Court 1",
            date(2024, 9, 22),
            time(11, 0),
        ),
        scheduled(
            "future-2",
            "4",
            "City Championship",
            Competitor::new("p17", "John Smith"),
            Competitor::new("p18", "Alex Johnson"),
            Category::Singles,
            Gender::Men,
            AgeGroup::Open19,
            Stage::Round1,
            COMMUNITY,
            "Court 4",
            date(2024, 9, 23),
            time(9, 0),
        ),
        // Finished yesterday.
        Match {
            status: MatchStatus::Completed,
            winner: Some(Side::A),
            duration_mins: Some(75),
            score: Some(Score::new(
                2,
                1,
                vec![
                    SetScore::new(11, 8),
                    SetScore::new(9, 11),
                    SetScore::new(11, 6),
                ],
            )),
            ..scheduled(
                "completed-1",
                "1",
                "Summer Championship 2024",
                Competitor::new("p19", "Emma Davis"),
                Competitor::new("p20", "Jessica Brown"),
                Category::Singles,
                Gender::Women,
                AgeGroup::Senior35,
                Stage::Quarterfinal,
                CENTRAL,
                "Court 2",
                date(2024, 9, 19),
                time(15, 0),
            )
        },
        Match {
            status: MatchStatus::Completed,
            winner: Some(Side::A),
            duration_mins: Some(90),
            score: Some(Score::new(
                2,
                0,
                vec![SetScore::new(11, 9), SetScore::new(11, 7)],
            )),
            ..scheduled(
                "completed-2",
                "2",
                "Regional Open",
                Competitor::new("p21", "Paul & Gary Moore"),
                Competitor::new("p22", "Steve & Mark Davis"),
                Category::Doubles,
                Gender::Men,
                AgeGroup::Senior35,
                Stage::Quarterfinal,
                PHOENIX,
                "Court 3",
                date(2024, 9, 19),
                time(17, 30),
            )
        },
        Match {
            status: MatchStatus::Completed,
            winner: Some(Side::B),
            duration_mins: Some(105),
            score: Some(Score::new(
                1,
                2,
                vec![
                    SetScore::new(11, 4),
                    SetScore::new(8, 11),
                    SetScore::new(9, 11),
                ],
            )),
            ..scheduled(
                "completed-3",
                "1",
                "Summer Championship 2024",
                Competitor::new("p23", "Mixed Team Alpha"),
                Competitor::new("p24", "Mixed Team Beta"),
                Category::Mixed,
                Gender::Mixed,
                AgeGroup::Open19,
                Stage::Semifinal,
                CENTRAL,
                "Court 1",
                date(2024, 9, 19),
                time(20, 0),
            )
        },
        // Earlier in the week.
        Match {
            status: MatchStatus::Completed,
            winner: Some(Side::A),
            duration_mins: Some(65),
            score: Some(Score::new(
                2,
                0,
                vec![SetScore::new(11, 5), SetScore::new(11, 8)],
            )),
            ..scheduled(
                "completed-4",
                "3",
                "State Finals",
                Competitor::new("p25", "Nancy Clark"),
                Competitor::new("p26", "Dorothy Lewis"),
                Category::Singles,
                Gender::Women,
                AgeGroup::Senior50,
                Stage::Quarterfinal,
                METRO,
                "Court 2",
                date(2024, 9, 18),
                time(10, 30),
            )
        },
        Match {
            status: MatchStatus::Completed,
            winner: Some(Side::B),
            duration_mins: Some(95),
            score: Some(Score::new(
                0,
                2,
                vec![SetScore::new(7, 11), SetScore::new(9, 11)],
            )),
            ..scheduled(
                "completed-5",
                "3",
                "State Finals",
                Competitor::new("p27", "Richard & Charles Wilson"),
                Competitor::new("p28", "George & Edward Taylor"),
                Category::Doubles,
                Gender::Men,
                AgeGroup::Senior50,
                Stage::Semifinal,
                METRO,
                "Court 1",
                date(2024, 9, 18),
                time(14, 0),
            )
        },
    ]
}
