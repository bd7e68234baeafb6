use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rally_hub::divisions::Category;
use rally_hub::fixtures;
use rally_hub::player::{Player, PlayerFilters, RankingTab, rank_players};
use rally_hub::schedule::{ScheduleFilters, group_by_date};
use rally_hub::tournament::TournamentFilters;

fn today() -> NaiveDate {
    fixtures::schedule_anchor()
}

/// Tile the fixture roster out to N records so the scaling benchmarks have
/// something bigger than the stock catalog to chew on.
fn roster_of(n: usize) -> Vec<Player> {
    let base = fixtures::players();
    (0..n)
        .map(|i| {
            let mut p = base[i % base.len()].clone();
            p.id = format!("{}-{i}", p.id);
            p.points = p.points.wrapping_add(i as u32 * 17 % 997);
            p
        })
        .collect()
}

fn bench_tournament_filter(c: &mut Criterion) {
    let catalog = fixtures::tournaments();
    let filters = TournamentFilters {
        search: "open".to_string(),
        categories: vec![Category::Singles, Category::Mixed],
        entry_fee: Some((25, 150)),
        ..Default::default()
    };

    c.bench_function("tournament_filter_fixture_catalog", |b| {
        b.iter(|| filters.apply(&catalog, today()));
    });
}

fn bench_rank_players(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_players");
    for n in [13, 130, 1300] {
        let roster = roster_of(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &roster, |b, roster| {
            b.iter(|| rank_players(roster, RankingTab::Overall));
        });
    }
    group.finish();
}

fn bench_player_directory(c: &mut Criterion) {
    let roster = roster_of(1300);
    let filters = PlayerFilters {
        search: "son".to_string(),
        category: Some(Category::Singles),
        ..Default::default()
    };

    c.bench_function("player_directory_filter_1300", |b| {
        b.iter(|| filters.apply(&roster, None));
    });
}

fn bench_schedule_grouping(c: &mut Criterion) {
    let schedule = fixtures::matches();
    let filters = ScheduleFilters::default();

    c.bench_function("schedule_filter_and_group", |b| {
        b.iter(|| group_by_date(filters.apply(&schedule, today())));
    });
}

criterion_group!(
    benches,
    bench_tournament_filter,
    bench_rank_players,
    bench_player_directory,
    bench_schedule_grouping
);
criterion_main!(benches);
