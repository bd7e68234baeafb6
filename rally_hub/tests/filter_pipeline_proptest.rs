//! Property-based tests for the filter/sort/derive pipeline.
//!
//! These pin the pipeline contract across randomly generated rosters and
//! filter states: default filters are the identity, constraints only
//! shrink, the pipeline is pure, and re-ranking always yields contiguous
//! 1-based ranks led by the points maximum.

use chrono::NaiveDate;
use proptest::prelude::*;
use rally_hub::divisions::{AgeGroup, Category, Gender, SkillLevel};
use rally_hub::player::{Player, PlayerFilters, RankingTab, Socials, rank_players};
use rally_hub::tournament::{Tournament, TournamentFilters};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Singles),
        Just(Category::Doubles),
        Just(Category::Mixed),
    ]
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Men), Just(Gender::Women), Just(Gender::Mixed)]
}

fn age_group_strategy() -> impl Strategy<Value = AgeGroup> {
    prop_oneof![
        Just(AgeGroup::Open19),
        Just(AgeGroup::Senior35),
        Just(AgeGroup::Senior50),
    ]
}

prop_compose! {
    fn player_strategy()(
        id in 1u32..10_000,
        name in "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}",
        category in category_strategy(),
        gender in gender_strategy(),
        age_group in age_group_strategy(),
        current_rank in 1u32..200,
        points in 0u32..5_000,
        wins in 0u32..60,
        losses in 0u32..60,
    ) -> Player {
        Player {
            id: format!("p{id}"),
            name,
            city: "Springfield".to_string(),
            region: "IL".to_string(),
            category,
            gender,
            age_group,
            current_rank,
            points,
            rank_change: 0,
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
}

prop_compose! {
    fn tournament_strategy()(
        id in 1u32..10_000,
        name in "[A-Z][a-z]{2,10} (Open|Classic|Cup)",
        fee in 0u32..=500,
        spots_taken in 0u32..64,
        total_spots in 1u32..=64,
        open in any::<bool>(),
        day in 0u32..365,
    ) -> Tournament {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            + chrono::Days::new(u64::from(day));
        Tournament {
            id: format!("t{id}"),
            name,
            start_date: start,
            end_date: start,
            location: "Springfield, IL".to_string(),
            categories: vec![Category::Singles],
            skill_level: SkillLevel::Intermediate,
            spots_left: total_spots.saturating_sub(spots_taken),
            total_spots,
            entry_fee: fee,
            registration_deadline: start,
            registration_open: open,
            organizer: "Springfield Paddle Club".to_string(),
        }
    }
}

fn roster_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(player_strategy(), 0..40)
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Tournament>> {
    prop::collection::vec(tournament_strategy(), 0..40)
}

fn tab_strategy() -> impl Strategy<Value = RankingTab> {
    prop_oneof![
        Just(RankingTab::Overall),
        Just(RankingTab::MensSingles),
        Just(RankingTab::WomensSingles),
        Just(RankingTab::Doubles),
        Just(RankingTab::Mixed),
    ]
}

fn player_filters_strategy() -> impl Strategy<Value = PlayerFilters> {
    (
        proptest::option::of(category_strategy()),
        proptest::option::of(gender_strategy()),
        proptest::option::of(age_group_strategy()),
        "[a-z]{0,4}",
    )
        .prop_map(|(category, gender, age_group, search)| PlayerFilters {
            search,
            category,
            gender,
            age_group,
            region: None,
            rank_tier: None,
        })
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()
}

proptest! {
    #[test]
    fn test_default_player_filters_are_identity(roster in roster_strategy()) {
        let filtered = PlayerFilters::default().apply(&roster, None);
        prop_assert_eq!(filtered.len(), roster.len());
    }

    #[test]
    fn test_default_tournament_filters_are_identity(catalog in catalog_strategy()) {
        let filtered = TournamentFilters::default().apply(&catalog, today());
        prop_assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn test_each_added_constraint_shrinks(
        roster in roster_strategy(),
        category in category_strategy(),
        gender in gender_strategy(),
    ) {
        let mut filters = PlayerFilters {
            category: Some(category),
            ..Default::default()
        };
        let one = filters.apply(&roster, None).len();
        prop_assert!(one <= roster.len());

        filters.gender = Some(gender);
        let two = filters.apply(&roster, None).len();
        prop_assert!(two <= one);
    }

    #[test]
    fn test_pipeline_is_pure(
        roster in roster_strategy(),
        filters in player_filters_strategy(),
    ) {
        let first: Vec<String> = filters.apply(&roster, None).into_iter().map(|p| p.id).collect();
        let second: Vec<String> = filters.apply(&roster, None).into_iter().map(|p| p.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_search_is_case_insensitive(
        roster in roster_strategy(),
        query in "[A-Za-z]{1,6}",
    ) {
        let lower = PlayerFilters { search: query.to_lowercase(), ..Default::default() };
        let upper = PlayerFilters { search: query.to_uppercase(), ..Default::default() };
        let a: Vec<String> = lower.apply(&roster, None).into_iter().map(|p| p.id).collect();
        let b: Vec<String> = upper.apply(&roster, None).into_iter().map(|p| p.id).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_rerank_is_contiguous_and_leads_with_max(
        roster in roster_strategy(),
        tab in tab_strategy(),
    ) {
        let ranked = rank_players(&roster, tab);

        for (idx, player) in ranked.iter().enumerate() {
            prop_assert_eq!(player.current_rank, idx as u32 + 1);
        }
        if let Some(leader) = ranked.first() {
            prop_assert!(ranked.iter().all(|p| p.points <= leader.points));
        }
        prop_assert!(ranked.windows(2).all(|pair| pair[0].points >= pair[1].points));
    }

    #[test]
    fn test_fee_range_never_admits_out_of_range(
        catalog in catalog_strategy(),
        lo in 0u32..=500,
        width in 0u32..=200,
    ) {
        let hi = lo.saturating_add(width).min(500);
        let filters = TournamentFilters {
            entry_fee: Some((lo, hi)),
            ..Default::default()
        };
        let filtered = filters.apply(&catalog, today());
        prop_assert!(filtered.iter().all(|t| (lo..=hi).contains(&t.entry_fee)));
    }
}
