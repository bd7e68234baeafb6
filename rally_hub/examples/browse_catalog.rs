//! Walk the catalogs from the command line: filtered tournaments, the
//! doubles leaderboard, and the schedule grouped by day.
//!
//! ```sh
//! cargo run --example browse_catalog
//! ```

use rally_hub::divisions::Category;
use rally_hub::fixtures;
use rally_hub::player::{RankingTab, rank_players};
use rally_hub::schedule::{ScheduleFilters, day_label, group_by_date};
use rally_hub::tournament::TournamentFilters;

fn main() {
    let today = fixtures::schedule_anchor();

    let filters = TournamentFilters {
        categories: vec![Category::Doubles],
        entry_fee: Some((25, 100)),
        ..Default::default()
    };
    println!("Doubles tournaments with entry fees $25-$100:");
    for t in filters.apply(&fixtures::tournaments(), today) {
        println!(
            "  {} — {} — ${} — {}/{} spots left",
            t.name, t.location, t.entry_fee, t.spots_left, t.total_spots
        );
    }

    println!("\nDoubles leaderboard:");
    for p in rank_players(&fixtures::players(), RankingTab::Doubles) {
        println!("  #{} {} — {} pts", p.current_rank, p.name, p.points);
    }

    println!("\nSchedule:");
    for group in group_by_date(ScheduleFilters::default().apply(&fixtures::matches(), today)) {
        println!("  {}:", day_label(group.date, today));
        for m in &group.matches {
            println!("    {} {} — {} ({})", m.time.format("%H:%M"), m.billing(), m.tournament_name, m.status);
        }
    }
}
