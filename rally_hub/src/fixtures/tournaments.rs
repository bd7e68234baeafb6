//! Browsable tournament listings.

use super::date;
use crate::divisions::{Category, SkillLevel};
use crate::tournament::Tournament;

/// The upcoming-tournament catalog.
pub fn tournaments() -> Vec<Tournament> {
    vec![
        Tournament {
            id: "t1".to_string(),
            name: "Autumn Slam Championship".to_string(),
            start_date: date(2024, 10, 12),
            end_date: date(2024, 10, 14),
            location: "Los Angeles, CA".to_string(),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            skill_level: SkillLevel::Advanced,
            spots_left: 18,
            total_spots: 64,
            entry_fee: 120,
            registration_deadline: date(2024, 9, 28),
            registration_open: true,
            organizer: "USA Pickleball".to_string(),
        },
        Tournament {
            id: "t2".to_string(),
            name: "City Parks Open".to_string(),
            start_date: date(2024, 10, 5),
            end_date: date(2024, 10, 6),
            location: "New York, NY".to_string(),
            categories: vec![Category::Singles, Category::Doubles],
            skill_level: SkillLevel::Intermediate,
            spots_left: 4,
            total_spots: 48,
            entry_fee: 45,
            registration_deadline: date(2024, 9, 26),
            registration_open: true,
            organizer: "NYC Parks League".to_string(),
        },
        Tournament {
            id: "t3".to_string(),
            name: "Lakeside Classic".to_string(),
            start_date: date(2024, 10, 19),
            end_date: date(2024, 10, 20),
            location: "Chicago, IL".to_string(),
            categories: vec![Category::Doubles],
            skill_level: SkillLevel::Intermediate,
            spots_left: 22,
            total_spots: 32,
            entry_fee: 60,
            registration_deadline: date(2024, 10, 4),
            registration_open: true,
            organizer: "Midwest Paddle Alliance".to_string(),
        },
        Tournament {
            id: "t4".to_string(),
            name: "Gulf Coast Invitational".to_string(),
            start_date: date(2024, 11, 2),
            end_date: date(2024, 11, 3),
            location: "Houston, TX".to_string(),
            categories: vec![Category::Singles, Category::Mixed],
            skill_level: SkillLevel::Advanced,
            // Waitlist only.
            spots_left: 0,
            total_spots: 40,
            entry_fee: 150,
            registration_deadline: date(2024, 10, 18),
            registration_open: true,
            organizer: "Texas Pickleball".to_string(),
        },
        Tournament {
            id: "t5".to_string(),
            name: "Sunshine State Showdown".to_string(),
            start_date: date(2024, 11, 9),
            end_date: date(2024, 11, 11),
            location: "Miami, FL".to_string(),
            categories: vec![Category::Singles, Category::Doubles, Category::Mixed],
            skill_level: SkillLevel::Beginner,
            spots_left: 35,
            total_spots: 80,
            entry_fee: 35,
            registration_deadline: date(2024, 10, 25),
            registration_open: true,
            organizer: "Florida Pickleball Federation".to_string(),
        },
        Tournament {
            id: "t6".to_string(),
            name: "Desert Duel".to_string(),
            start_date: date(2024, 10, 26),
            end_date: date(2024, 10, 27),
            location: "Phoenix, AZ".to_string(),
            categories: vec![Category::Doubles, Category::Mixed],
            skill_level: SkillLevel::Advanced,
            spots_left: 9,
            total_spots: 24,
            entry_fee: 95,
            registration_deadline: date(2024, 10, 11),
            registration_open: true,
            organizer: "Arizona Pickleball Association".to_string(),
        },
        Tournament {
            id: "t7".to_string(),
            name: "Rocky Mountain Rally".to_string(),
            start_date: date(2024, 11, 16),
            end_date: date(2024, 11, 17),
            location: "Denver, CO".to_string(),
            categories: vec![Category::Singles],
            skill_level: SkillLevel::Intermediate,
            spots_left: 14,
            total_spots: 36,
            entry_fee: 80,
            registration_deadline: date(2024, 11, 1),
            registration_open: true,
            organizer: "Mountain Pickleball League".to_string(),
        },
        Tournament {
            id: "t8".to_string(),
            name: "Harbor City Winter Cup".to_string(),
            start_date: date(2024, 12, 7),
            end_date: date(2024, 12, 8),
            location: "Seattle, WA".to_string(),
            categories: vec![Category::Mixed],
            skill_level: SkillLevel::Intermediate,
            spots_left: 27,
            total_spots: 40,
            entry_fee: 55,
            registration_deadline: date(2024, 11, 22),
            registration_open: false,
            organizer: "Pacific Northwest Pickleball".to_string(),
        },
        Tournament {
            id: "t9".to_string(),
            name: "First Serve Bash".to_string(),
            start_date: date(2024, 9, 28),
            end_date: date(2024, 9, 29),
            location: "Chicago, IL".to_string(),
            categories: vec![Category::Singles, Category::Doubles],
            skill_level: SkillLevel::Beginner,
            spots_left: 6,
            total_spots: 50,
            entry_fee: 25,
            registration_deadline: date(2024, 9, 21),
            registration_open: true,
            organizer: "Midwest Paddle Alliance".to_string(),
        },
    ]
}
