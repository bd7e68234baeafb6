//! Integration tests for the browsing pipelines.
//!
//! These exercise the catalogs end to end: fixture invariants, the
//! filter/sort contracts, and the registration lifecycle.

use chrono::NaiveDate;
use rally_hub::divisions::{Category, SkillLevel};
use rally_hub::fixtures;
use rally_hub::player::{PlayerFilters, RankingTab, rank_players};
use rally_hub::results::{ResultFilters, group_by_tournament};
use rally_hub::schedule::{MatchStatus, ScheduleFilters, Side, group_by_date};
use rally_hub::tournament::{
    Registered, RegistrationBook, RegistrationError, Tournament, TournamentFilters,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    fixtures::schedule_anchor()
}

// === Fixture invariants ===

#[test]
fn test_fixture_spots_within_capacity() {
    for t in fixtures::tournaments() {
        assert!(
            t.spots_left <= t.total_spots,
            "{} has {} of {} spots left",
            t.name,
            t.spots_left,
            t.total_spots
        );
    }
}

#[test]
fn test_fixture_catalog_has_closed_and_full_listings() {
    let catalog = fixtures::tournaments();
    assert!(catalog.iter().any(|t| !t.registration_open));
    assert!(catalog.iter().any(|t| t.is_full()));
}

#[test]
fn test_fixture_completed_matches_carry_consistent_winners() {
    for m in fixtures::matches() {
        if m.status != MatchStatus::Completed {
            continue;
        }
        let winner = m.winner.expect("completed matches have a winner");
        let score = m.score.as_ref().expect("completed matches have a score");
        match winner {
            Side::A => assert!(score.sets_a > score.sets_b, "{}", m.id),
            Side::B => assert!(score.sets_b > score.sets_a, "{}", m.id),
        }
    }
}

#[test]
fn test_fixture_set_totals_match_per_set_scores() {
    for result in fixtures::match_results() {
        let score = &result.score;
        let won_a = score
            .sets
            .iter()
            .filter(|set| set.side_a > set.side_b)
            .count() as u32;
        let won_b = score
            .sets
            .iter()
            .filter(|set| set.side_b > set.side_a)
            .count() as u32;
        assert_eq!((score.sets_a, score.sets_b), (won_a, won_b), "{}", result.id);
    }
}

#[test]
fn test_fixture_result_tournaments_resolve_in_archive() {
    let archive = fixtures::tournament_archive();
    for result in fixtures::match_results() {
        assert!(
            archive.iter().any(|t| t.id == result.tournament_id),
            "{} references unknown tournament {}",
            result.id,
            result.tournament_id
        );
    }
}

// === End-to-end filter scenarios ===

fn fee_catalog() -> Vec<Tournament> {
    let template = &fixtures::tournaments()[0];
    [("a", 50), ("b", 120), ("c", 80)]
        .into_iter()
        .map(|(id, fee)| Tournament {
            id: id.to_string(),
            name: format!("Tournament {id}"),
            entry_fee: fee,
            ..template.clone()
        })
        .collect()
}

#[test]
fn test_fee_range_selects_only_the_middle_listing() {
    let catalog = fee_catalog();
    let filters = TournamentFilters {
        entry_fee: Some((60, 100)),
        ..Default::default()
    };
    let filtered = filters.apply(&catalog, today());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].entry_fee, 80);
}

#[test]
fn test_doubles_rerank_ignores_stored_ranks() {
    let roster = fixtures::players();
    let ranked = rank_players(&roster, RankingTab::Doubles);
    assert!(!ranked.is_empty());
    assert_eq!(ranked[0].current_rank, 1);
    // The doubles leader's stored rank is not 1 overall.
    let leader = roster
        .iter()
        .find(|p| p.id == ranked[0].id)
        .expect("leader exists in the roster");
    assert_ne!(leader.current_rank, 1);
    // Points order holds.
    assert!(ranked.windows(2).all(|pair| pair[0].points >= pair[1].points));
}

#[test]
fn test_stacked_constraints_only_shrink() {
    let catalog = fixtures::tournaments();
    let mut filters = TournamentFilters::default();
    let mut last = filters.apply(&catalog, today()).len();

    filters.categories = vec![Category::Doubles];
    let n = filters.apply(&catalog, today()).len();
    assert!(n <= last);
    last = n;

    filters.skill_level = Some(SkillLevel::Advanced);
    let n = filters.apply(&catalog, today()).len();
    assert!(n <= last);
    last = n;

    filters.search = "phoenix".to_string();
    let n = filters.apply(&catalog, today()).len();
    assert!(n <= last);
}

#[test]
fn test_pipeline_is_pure() {
    let catalog = fixtures::tournaments();
    let filters = TournamentFilters {
        search: "open".to_string(),
        categories: vec![Category::Singles],
        ..Default::default()
    };
    let first: Vec<String> = filters
        .apply(&catalog, today())
        .into_iter()
        .map(|t| t.id)
        .collect();
    let second: Vec<String> = filters
        .apply(&catalog, today())
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_result_is_a_state_not_an_error() {
    let filters = PlayerFilters {
        search: "nobody by this name".to_string(),
        ..Default::default()
    };
    let filtered = filters.apply(&fixtures::players(), None);
    assert!(filtered.is_empty());
    // Reset restores the identity view.
    let reset = PlayerFilters::default().apply(&fixtures::players(), None);
    assert_eq!(reset.len(), fixtures::players().len());
}

// === Grouping ===

#[test]
fn test_schedule_days_cover_the_anchor_week() {
    let filtered = ScheduleFilters::default().apply(&fixtures::matches(), today());
    let groups = group_by_date(filtered);
    let days: Vec<NaiveDate> = groups.iter().map(|g| g.date).collect();
    assert!(days.contains(&date(2024, 9, 19)));
    assert!(days.contains(&date(2024, 9, 20)));
    assert!(days.contains(&date(2024, 9, 21)));
    // Every fixture match lands in exactly one group.
    let total: usize = groups.iter().map(|g| g.matches.len()).sum();
    assert_eq!(total, fixtures::matches().len());
}

#[test]
fn test_results_group_counts_follow_the_archive() {
    let filtered = ResultFilters::default().apply(&fixtures::match_results());
    let groups = group_by_tournament(&filtered, &fixtures::tournament_archive());
    // Summer Championship has five results in the fixture archive.
    let summer = groups
        .iter()
        .find(|g| g.tournament.id == "completed-1")
        .expect("summer championship group");
    assert_eq!(summer.matches.len(), 5);
    // Most recently finished tournament leads.
    assert_eq!(groups[0].tournament.id, "completed-1");
}

// === Registration lifecycle ===

#[test]
fn test_registration_end_to_end() {
    let catalog = fixtures::tournaments();
    let mut book = RegistrationBook::new();

    let open = catalog
        .iter()
        .find(|t| t.registration_open && !t.is_full())
        .expect("an open listing");
    let full = catalog.iter().find(|t| t.is_full()).expect("a full listing");
    let closed = catalog
        .iter()
        .find(|t| !t.registration_open)
        .expect("a closed listing");

    assert_eq!(book.register(open), Ok(Registered::New));
    assert_eq!(book.register(open), Ok(Registered::Already));
    assert_eq!(
        book.register(full),
        Err(RegistrationError::Full(full.name.clone()))
    );
    assert_eq!(
        book.register(closed),
        Err(RegistrationError::Closed(closed.name.clone()))
    );
    assert_eq!(book.len(), 1);
    assert!(book.is_registered(&open.id));
}
