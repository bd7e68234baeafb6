//! Integration tests driving the TUI app through its command surface,
//! no terminal required.

use chrono::NaiveDate;
use rally_hub::divisions::Category;
use rh_client::commands::Page;
use rh_client::tui_app::TuiApp;

// The fixture schedule is anchored on this day.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()
}

fn app() -> TuiApp {
    TuiApp::new("ada".to_string(), Page::Tournaments, today())
}

#[test]
fn test_navigation_between_pages() {
    let mut app = app();
    assert_eq!(app.page(), Page::Tournaments);

    app.handle_input("page rankings");
    assert_eq!(app.page(), Page::Rankings);

    app.handle_input("go players");
    assert_eq!(app.page(), Page::Players);
}

#[test]
fn test_unparseable_input_changes_nothing() {
    let mut app = app();
    let before = app.visible_tournaments().len();
    app.handle_input("serve hard");
    app.handle_input("filter fee 100 60");
    assert_eq!(app.page(), Page::Tournaments);
    assert_eq!(app.visible_tournaments().len(), before);
}

#[test]
fn test_category_filter_toggles_like_a_chip() {
    let mut app = app();
    let all = app.visible_tournaments().len();

    app.handle_input("filter category doubles");
    let doubles_only = app.visible_tournaments();
    assert!(doubles_only.len() < all);
    assert!(
        doubles_only
            .iter()
            .all(|t| t.categories.contains(&Category::Doubles))
    );

    // Repeating the same value removes the chip again.
    app.handle_input("filter category doubles");
    assert_eq!(app.visible_tournaments().len(), all);
}

#[test]
fn test_fee_filter_narrows_and_clears() {
    let mut app = app();
    let all = app.visible_tournaments().len();

    app.handle_input("filter fee 60 100");
    let narrowed = app.visible_tournaments();
    assert!(!narrowed.is_empty());
    assert!(narrowed.len() < all);
    assert!(
        narrowed
            .iter()
            .all(|t| (60..=100).contains(&t.entry_fee))
    );

    app.handle_input("filter fee");
    assert_eq!(app.visible_tournaments().len(), all);
}

#[test]
fn test_search_then_reset_restores_identity() {
    let mut app = app();
    let all = app.visible_tournaments().len();

    app.handle_input("search phoenix");
    assert!(app.visible_tournaments().len() < all);

    app.handle_input("reset");
    assert_eq!(app.visible_tournaments().len(), all);
}

#[test]
fn test_open_and_back() {
    let mut app = app();
    assert!(!app.detail_open());

    app.handle_input("open 1");
    assert!(app.detail_open());

    app.handle_input("back");
    assert!(!app.detail_open());
}

#[test]
fn test_open_out_of_range_is_not_fatal() {
    let mut app = app();
    app.handle_input("open 99");
    assert!(!app.detail_open());
}

#[test]
fn test_navigation_closes_detail() {
    let mut app = app();
    app.handle_input("open 1");
    assert!(app.detail_open());

    app.handle_input("page schedule");
    assert!(!app.detail_open());
}

#[test]
fn test_register_from_listing_is_idempotent() {
    let mut app = app();
    let first = app.visible_tournaments()[0].clone();
    assert!(first.registration_open && !first.is_full());

    app.handle_input("register 1");
    assert!(app.is_registered(&first.id));

    // A second registration changes nothing.
    app.handle_input("register 1");
    assert!(app.is_registered(&first.id));
}

#[test]
fn test_register_from_open_detail() {
    let mut app = app();
    let first = app.visible_tournaments()[0].clone();

    app.handle_input("open 1");
    app.handle_input("register");
    assert!(app.is_registered(&first.id));
}

#[test]
fn test_register_full_or_closed_is_rejected() {
    let mut app = app();
    let listings = app.visible_tournaments();
    let full_at = listings.iter().position(|t| t.is_full()).unwrap();
    let closed_at = listings.iter().position(|t| !t.registration_open).unwrap();

    app.handle_input(&format!("register {}", full_at + 1));
    assert!(!app.is_registered(&listings[full_at].id));

    app.handle_input(&format!("register {}", closed_at + 1));
    assert!(!app.is_registered(&listings[closed_at].id));
}

#[test]
fn test_rankings_tab_reranks_from_one() {
    let mut app = app();
    app.handle_input("page rankings");

    let overall = app.ranked_players();
    assert_eq!(overall[0].current_rank, 1);

    app.handle_input("tab doubles");
    let doubles = app.ranked_players();
    assert!(!doubles.is_empty());
    assert!(doubles.len() < overall.len());
    assert_eq!(doubles[0].current_rank, 1);
    assert!(doubles.iter().all(|p| p.category == Category::Doubles));
}

#[test]
fn test_schedule_tab_today() {
    let mut app = app();
    app.handle_input("page schedule");

    let all = app.visible_matches().len();
    app.handle_input("tab today");
    let today_only = app.visible_matches();
    assert!(!today_only.is_empty());
    assert!(today_only.len() < all);
    assert!(today_only.iter().all(|m| m.date == today()));
}

#[test]
fn test_sort_toggles_direction() {
    let mut app = app();
    app.handle_input("page players");

    app.handle_input("sort points");
    let descending: Vec<u32> = app.visible_players().iter().map(|p| p.points).collect();
    assert!(descending.windows(2).all(|pair| pair[0] >= pair[1]));

    app.handle_input("sort points");
    let ascending: Vec<u32> = app.visible_players().iter().map(|p| p.points).collect();
    assert!(ascending.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_expand_toggles_results_group() {
    let mut app = app();
    app.handle_input("page results");

    let first_group = app.result_groups()[0].tournament.id.clone();
    assert!(!app.is_group_expanded(&first_group));

    app.handle_input("expand 1");
    assert!(app.is_group_expanded(&first_group));

    app.handle_input("expand 1");
    assert!(!app.is_group_expanded(&first_group));
}

#[test]
fn test_results_filters_narrow_groups() {
    let mut app = app();
    app.handle_input("page results");

    let all_groups = app.result_groups().len();
    app.handle_input("filter year 2023");
    let groups = app.result_groups();
    assert!(!groups.is_empty());
    assert!(groups.len() < all_groups);
    assert!(groups.iter().all(|g| g.tournament.year == 2023));
}

#[test]
fn test_filters_are_scoped_to_their_page() {
    let mut app = app();
    // The tournaments page has no stage filter; nothing should change.
    let before = app.visible_tournaments().len();
    app.handle_input("filter stage final");
    assert_eq!(app.visible_tournaments().len(), before);

    // And the players page accepts it no better.
    app.handle_input("page players");
    let players_before = app.visible_players().len();
    app.handle_input("filter stage final");
    assert_eq!(app.visible_players().len(), players_before);
}
