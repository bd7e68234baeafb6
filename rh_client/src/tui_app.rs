//! TUI application for browsing the tournament catalog.
//!
//! One screen in the classic shape: a page-specific content area, a
//! scrollable activity log, a command input box, and a status bar. All
//! state is session-local; every keystroke re-derives the visible lists
//! through the library pipeline.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rally_hub::fixtures;
use rally_hub::player::{
    self, DirectorySort, Player, PlayerFilters, RankingTab, SortDirection, SortField,
};
use rally_hub::results::{
    MatchResult, ResultFilters, TournamentGroup, TournamentSummary, WinnerSpotlight,
    group_by_tournament,
};
use rally_hub::schedule::{
    DayGroup, Match, MatchStatus, ScheduleFilters, ScheduleTab, Score, day_label, group_by_date,
    live_matches,
};
use rally_hub::tournament::{
    Registered, RegistrationBook, Tournament, TournamentFilters, TournamentId,
};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect},
    style::{Style, Stylize},
    symbols::scrollbar,
    text::{Line, Span, Text},
    widgets::{
        Block, Cell, Clear, List, ListDirection, ListItem, Padding, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, Table, Wrap,
    },
};
use std::collections::HashSet;
use std::time::Duration;

mod widgets;

use crate::commands::{Command, FilterArg, Page, parse_command};
use widgets::{ScrollableList, UserInput};

const HELP: &str = "\
page NAME
        Switch pages: home, tournaments, schedule, rankings, results, players.
search TEXT
        Search the current page; 'search' alone clears the query.
filter FIELD [VALUE]
        Constrain one field; omit the value to clear it.
          tournaments: location, category, skill, status, window, fee LO HI
          players:     category, gender, age, region, tier
          schedule:    tournament, category, gender, age, date YYYY-MM-DD
          results:     tournament, year, category, gender, age, stage
tab NAME
        Rankings: overall, mens singles, womens singles, doubles, mixed.
        Schedule: all, today, upcoming, completed.
sort COLUMN
        Players directory: points, winrate, matches. Repeat to flip.
open N
        Open the N-th listing (tournament details or player profile).
register [N]
        Register for the N-th listed tournament, or the open one.
expand N
        Toggle the N-th results group open or closed.
share
        Serialize the open listing into the log.
more
        Ask for more listings (there are no more).
reset
        Clear the current page's filters.
back
        Leave the open detail view.
";
const MAX_LOG_RECORDS: usize = 1024;
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Importance label on a log record, directing user attention.
#[derive(Clone, Copy)]
enum RecordKind {
    Ack,
    Alert,
    Error,
    Info,
    You,
}

/// A timestamped activity-log entry. Notification toasts from the catalog
/// land here.
#[derive(Clone)]
struct Record {
    datetime: DateTime<Utc>,
    kind: RecordKind,
    content: String,
}

impl Record {
    fn new(kind: RecordKind, content: String) -> Self {
        Self {
            datetime: Utc::now(),
            kind,
            content,
        }
    }
}

impl From<Record> for ListItem<'_> {
    fn from(val: Record) -> Self {
        let repr = match val.kind {
            RecordKind::Ack => "ACK".light_green(),
            RecordKind::Alert => "ALERT".light_magenta(),
            RecordKind::Error => "ERROR".light_red(),
            RecordKind::Info => "INFO".light_blue(),
            RecordKind::You => "YOU".light_yellow(),
        };

        let msg = vec![
            format!("[{} ", val.datetime.format("%H:%M:%S")).into(),
            Span::styled(format!("{repr:5}"), repr.style),
            format!("]: {}", val.content).into(),
        ];

        ListItem::new(Line::from(msg))
    }
}

fn fmt_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "Aug 15 - 18, 2024" within one month, "Aug 30 - Sep 2, 2024" across.
fn fmt_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.format("%Y-%m").to_string() == end.format("%Y-%m").to_string() {
        format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%-d, %Y")
        )
    } else {
        format!(
            "{} - {}",
            start.format("%b %-d"),
            end.format("%b %-d, %Y")
        )
    }
}

/// "11-7, 9-11, 11-6"
fn fmt_set_scores(score: &Score) -> String {
    score
        .sets
        .iter()
        .map(|set| format!("{}-{}", set.side_a, set.side_b))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_rank_change(change: i32) -> String {
    match change {
        0 => "—".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

/// TUI App state
pub struct TuiApp {
    user: String,
    page: Page,
    today: NaiveDate,
    // Catalogs, loaded once.
    tournaments: Vec<Tournament>,
    players: Vec<Player>,
    matches: Vec<Match>,
    archive: Vec<TournamentSummary>,
    results: Vec<MatchResult>,
    spotlights: Vec<WinnerSpotlight>,
    // Per-page view state.
    tournament_filters: TournamentFilters,
    player_filters: PlayerFilters,
    player_sort: Option<DirectorySort>,
    schedule_filters: ScheduleFilters,
    result_filters: ResultFilters,
    ranking_tab: RankingTab,
    open_tournament: Option<TournamentId>,
    open_player: Option<String>,
    expanded_groups: HashSet<TournamentId>,
    registrations: RegistrationBook,
    // Chrome.
    show_help_menu: bool,
    help_handle: ScrollableList,
    log_handle: ScrollableList,
    user_input: UserInput,
}

impl TuiApp {
    pub fn new(user: String, page: Page, today: NaiveDate) -> Self {
        let mut help_handle = ScrollableList::new(MAX_LOG_RECORDS);
        help_handle.push("".into());
        for line in HELP.lines() {
            help_handle.push(line.to_string().into());
        }
        help_handle.push("".into());
        help_handle.jump_to_first();

        Self {
            user,
            page,
            today,
            tournaments: fixtures::tournaments(),
            players: fixtures::players(),
            matches: fixtures::matches(),
            archive: fixtures::tournament_archive(),
            results: fixtures::match_results(),
            spotlights: fixtures::spotlights(),
            tournament_filters: TournamentFilters::default(),
            player_filters: PlayerFilters::default(),
            player_sort: None,
            schedule_filters: ScheduleFilters::default(),
            result_filters: ResultFilters::default(),
            ranking_tab: RankingTab::Overall,
            open_tournament: None,
            open_player: None,
            expanded_groups: HashSet::new(),
            registrations: RegistrationBook::new(),
            show_help_menu: false,
            help_handle,
            log_handle: ScrollableList::new(MAX_LOG_RECORDS),
            user_input: UserInput::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registrations.is_registered(id)
    }

    pub fn is_group_expanded(&self, id: &str) -> bool {
        self.expanded_groups.contains(id)
    }

    fn add_log(&mut self, kind: RecordKind, content: String) {
        let record = Record::new(kind, content);
        self.log_handle.push(record.into());
    }

    /// Parse and run one line of user input, logging the outcome.
    pub fn handle_input(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        match parse_command(input) {
            Ok(command) => {
                self.add_log(RecordKind::You, input.to_string());
                self.apply_command(command);
            }
            Err(e) => self.add_log(RecordKind::Error, e.to_string()),
        }
    }

    // === Derived views ===

    /// Tournaments passing the current filters, in catalog order.
    pub fn visible_tournaments(&self) -> Vec<Tournament> {
        self.tournament_filters.apply(&self.tournaments, self.today)
    }

    /// Directory players under the current filters and sort.
    pub fn visible_players(&self) -> Vec<Player> {
        self.player_filters.apply(&self.players, self.player_sort)
    }

    /// Leaderboard for the selected tab, re-ranked.
    pub fn ranked_players(&self) -> Vec<Player> {
        player::rank_players(&self.players, self.ranking_tab)
    }

    /// Schedule under the current filters, in (date, time) order.
    pub fn visible_matches(&self) -> Vec<Match> {
        self.schedule_filters.apply(&self.matches, self.today)
    }

    fn day_groups(&self) -> Vec<DayGroup> {
        group_by_date(self.visible_matches())
    }

    /// Filtered results grouped by archive tournament.
    pub fn result_groups(&self) -> Vec<TournamentGroup> {
        group_by_tournament(&self.result_filters.apply(&self.results), &self.archive)
    }

    fn opened_tournament(&self) -> Option<&Tournament> {
        let id = self.open_tournament.as_deref()?;
        self.tournaments.iter().find(|t| t.id == id)
    }

    fn opened_player(&self) -> Option<&Player> {
        let id = self.open_player.as_deref()?;
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether a detail view is covering the current page.
    pub fn detail_open(&self) -> bool {
        self.open_tournament.is_some() || self.open_player.is_some()
    }

    fn close_detail(&mut self) {
        self.open_tournament = None;
        self.open_player = None;
    }

    // === Command application ===

    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Go(page) => {
                self.page = page;
                // Leaving a page drops its detail view.
                self.close_detail();
            }
            Command::Search(query) => self.apply_search(query),
            Command::Filter(arg) => self.apply_filter(arg),
            Command::Tab(name) => self.apply_tab(&name),
            Command::Sort(field) => self.apply_sort(field),
            Command::Open(n) => self.apply_open(n),
            Command::Back => {
                if self.detail_open() {
                    self.close_detail();
                } else {
                    self.add_log(RecordKind::Alert, "Nothing is open".to_string());
                }
            }
            Command::Register(n) => self.apply_register(n),
            Command::Expand(n) => self.apply_expand(n),
            Command::More => {
                if self.page == Page::Tournaments {
                    self.add_log(RecordKind::Info, "Loading more tournaments...".to_string());
                } else {
                    self.add_log(RecordKind::Alert, "Nothing more to load".to_string());
                }
            }
            Command::Share => self.apply_share(),
            Command::Reset => self.apply_reset(),
        }
    }

    fn apply_search(&mut self, query: Option<String>) {
        let query = query.unwrap_or_default();
        match self.page {
            Page::Tournaments => self.tournament_filters.search = query,
            Page::Players => self.player_filters.search = query,
            Page::Schedule => self.schedule_filters.search = query,
            Page::Results => self.result_filters.search = query,
            page => {
                self.add_log(RecordKind::Error, format!("The {page} page has no search"));
            }
        }
    }

    fn apply_filter(&mut self, arg: FilterArg) {
        let field = arg.field();
        let applied = match (self.page, arg) {
            (Page::Tournaments, FilterArg::Location(v)) => {
                self.tournament_filters.location = v;
                true
            }
            (Page::Tournaments, FilterArg::Category(v)) => {
                // Category chips toggle: repeat a value to drop it again.
                match v {
                    Some(category) => {
                        let selected = &mut self.tournament_filters.categories;
                        if let Some(at) = selected.iter().position(|c| *c == category) {
                            selected.remove(at);
                        } else {
                            selected.push(category);
                        }
                    }
                    None => self.tournament_filters.categories.clear(),
                }
                true
            }
            (Page::Tournaments, FilterArg::Skill(v)) => {
                self.tournament_filters.skill_level = v;
                true
            }
            (Page::Tournaments, FilterArg::Status(v)) => {
                self.tournament_filters.registration_status = v;
                true
            }
            (Page::Tournaments, FilterArg::Window(v)) => {
                self.tournament_filters.date_window = v;
                true
            }
            (Page::Tournaments, FilterArg::Fee(v)) => {
                self.tournament_filters.entry_fee = v;
                true
            }
            (Page::Players, FilterArg::Category(v)) => {
                self.player_filters.category = v;
                true
            }
            (Page::Players, FilterArg::Gender(v)) => {
                self.player_filters.gender = v;
                true
            }
            (Page::Players, FilterArg::Age(v)) => {
                self.player_filters.age_group = v;
                true
            }
            (Page::Players, FilterArg::Region(v)) => {
                self.player_filters.region = v;
                true
            }
            (Page::Players, FilterArg::Tier(v)) => {
                self.player_filters.rank_tier = v;
                true
            }
            (Page::Schedule, FilterArg::Tournament(v)) => {
                self.schedule_filters.tournament = v;
                true
            }
            (Page::Schedule, FilterArg::Category(v)) => {
                self.schedule_filters.category = v;
                true
            }
            (Page::Schedule, FilterArg::Gender(v)) => {
                self.schedule_filters.gender = v;
                true
            }
            (Page::Schedule, FilterArg::Age(v)) => {
                self.schedule_filters.age_group = v;
                true
            }
            (Page::Schedule, FilterArg::Date(v)) => {
                self.schedule_filters.date = v;
                true
            }
            (Page::Results, FilterArg::Tournament(v)) => {
                self.result_filters.tournament = v;
                true
            }
            (Page::Results, FilterArg::Year(v)) => {
                self.result_filters.year = v;
                true
            }
            (Page::Results, FilterArg::Category(v)) => {
                self.result_filters.category = v;
                true
            }
            (Page::Results, FilterArg::Gender(v)) => {
                self.result_filters.gender = v;
                true
            }
            (Page::Results, FilterArg::Age(v)) => {
                self.result_filters.age_group = v;
                true
            }
            (Page::Results, FilterArg::Stage(v)) => {
                self.result_filters.stage = v;
                true
            }
            _ => false,
        };

        if applied {
            let active = self.active_filter_count();
            self.add_log(
                RecordKind::Info,
                format!("{field} filter updated ({active} active)"),
            );
        } else {
            self.add_log(
                RecordKind::Error,
                format!("The {} page has no {field} filter", self.page),
            );
        }
    }

    fn active_filter_count(&self) -> usize {
        match self.page {
            Page::Tournaments => self.tournament_filters.active_count(),
            Page::Players => self.player_filters.active_count(),
            Page::Schedule => self.schedule_filters.active_count(),
            Page::Results => self.result_filters.active_count(),
            Page::Home | Page::Rankings => 0,
        }
    }

    fn apply_tab(&mut self, name: &str) {
        match self.page {
            Page::Rankings => match name.parse::<RankingTab>() {
                Ok(tab) => self.ranking_tab = tab,
                Err(e) => self.add_log(RecordKind::Error, e),
            },
            Page::Schedule => match name.parse::<ScheduleTab>() {
                Ok(tab) => self.schedule_filters.tab = tab,
                Err(e) => self.add_log(RecordKind::Error, e),
            },
            page => self.add_log(RecordKind::Error, format!("The {page} page has no tabs")),
        }
    }

    fn apply_sort(&mut self, field: SortField) {
        if self.page != Page::Players {
            self.add_log(
                RecordKind::Error,
                "Sorting is only available on the players page".to_string(),
            );
            return;
        }
        let sort = DirectorySort::select(self.player_sort, field);
        self.player_sort = Some(sort);
        let direction = match sort.direction {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };
        self.add_log(RecordKind::Info, format!("Sorted by {field}, {direction}"));
    }

    fn apply_open(&mut self, n: usize) {
        match self.page {
            Page::Tournaments => match self.visible_tournaments().get(n - 1) {
                Some(t) => self.open_tournament = Some(t.id.clone()),
                None => self.add_log(RecordKind::Error, format!("No listing {n}")),
            },
            Page::Players => match self.visible_players().get(n - 1) {
                Some(p) => self.open_player = Some(p.id.clone()),
                None => self.add_log(RecordKind::Error, format!("No listing {n}")),
            },
            Page::Rankings => match self.ranked_players().get(n - 1) {
                Some(p) => self.open_player = Some(p.id.clone()),
                None => self.add_log(RecordKind::Error, format!("No listing {n}")),
            },
            Page::Schedule => match self.visible_matches().get(n - 1) {
                Some(m) => self.add_log(
                    RecordKind::Info,
                    format!("Viewing details for {}", m.billing()),
                ),
                None => self.add_log(RecordKind::Error, format!("No listing {n}")),
            },
            page => self.add_log(
                RecordKind::Error,
                format!("There is nothing to open on the {page} page"),
            ),
        }
    }

    fn apply_register(&mut self, n: Option<usize>) {
        let target = match n {
            Some(n) => {
                if self.page != Page::Tournaments {
                    self.add_log(
                        RecordKind::Error,
                        "Registration happens on the tournaments page".to_string(),
                    );
                    return;
                }
                self.visible_tournaments().get(n - 1).cloned()
            }
            None => self.opened_tournament().cloned(),
        };
        let Some(tournament) = target else {
            self.add_log(
                RecordKind::Error,
                "Open a tournament or give its listing number".to_string(),
            );
            return;
        };

        match self.registrations.register(&tournament) {
            Ok(Registered::New) => self.add_log(
                RecordKind::Ack,
                format!("Registration initiated for {}!", tournament.name),
            ),
            Ok(Registered::Already) => self.add_log(
                RecordKind::Info,
                format!("Already registered for {}", tournament.name),
            ),
            Err(e) => self.add_log(RecordKind::Error, e.to_string()),
        }
    }

    fn apply_expand(&mut self, n: usize) {
        if self.page != Page::Results {
            self.add_log(
                RecordKind::Error,
                "Expand toggles results groups; switch to the results page".to_string(),
            );
            return;
        }
        match self.result_groups().get(n - 1) {
            Some(group) => {
                let id = group.tournament.id.clone();
                let name = group.tournament.name.clone();
                if self.expanded_groups.remove(&id) {
                    self.add_log(RecordKind::Info, format!("Collapsed {name}"));
                } else {
                    self.expanded_groups.insert(id);
                    self.add_log(RecordKind::Info, format!("Expanded {name}"));
                }
            }
            None => self.add_log(RecordKind::Error, format!("No results group {n}")),
        }
    }

    fn apply_share(&mut self) {
        // Best effort, like the browser share sheet: serialize what is open
        // and drop it into the log.
        let serialized = if let Some(t) = self.opened_tournament() {
            serde_json::to_string(t).map(|json| (t.name.clone(), json))
        } else if let Some(p) = self.opened_player() {
            serde_json::to_string(p).map(|json| (p.name.clone(), json))
        } else {
            self.add_log(RecordKind::Alert, "Open a listing to share it".to_string());
            return;
        };
        match serialized {
            Ok((name, json)) => {
                self.add_log(RecordKind::Info, json);
                self.add_log(RecordKind::Ack, format!("Shared {name}"));
            }
            Err(e) => self.add_log(RecordKind::Error, e.to_string()),
        }
    }

    fn apply_reset(&mut self) {
        match self.page {
            Page::Tournaments => self.tournament_filters = TournamentFilters::default(),
            Page::Players => {
                self.player_filters = PlayerFilters::default();
                self.player_sort = None;
            }
            Page::Schedule => self.schedule_filters = ScheduleFilters::default(),
            Page::Results => self.result_filters = ResultFilters::default(),
            Page::Rankings => self.ranking_tab = RankingTab::Overall,
            Page::Home => {}
        }
        self.add_log(RecordKind::Ack, "Cleared all filters".to_string());
    }

    // === Rendering ===

    fn draw_content(&mut self, frame: &mut Frame, area: Rect) {
        if self.opened_tournament().is_some() {
            self.draw_tournament_detail(frame, area);
            return;
        }
        if self.opened_player().is_some() {
            self.draw_player_profile(frame, area);
            return;
        }
        match self.page {
            Page::Home => self.draw_home(frame, area),
            Page::Tournaments => self.draw_tournaments(frame, area),
            Page::Schedule => self.draw_schedule(frame, area),
            Page::Rankings => self.draw_rankings(frame, area),
            Page::Results => self.draw_results(frame, area),
            Page::Players => self.draw_players(frame, area),
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let open_count = self
            .tournaments
            .iter()
            .filter(|t| t.registration_open && !t.is_full())
            .count();
        let live_now = live_matches(&self.matches).len();

        let mut lines = vec![
            Line::from("Welcome to Rally Hub".bold()),
            Line::from("Your destination for pickleball tournaments and rankings."),
            Line::from(""),
            Line::from(format!(
                "{} tournaments open for registration | {} ranked players | {} matches live now",
                open_count,
                self.players.len(),
                live_now
            )),
            Line::from(""),
            Line::from("Top players".bold()),
        ];
        for p in player::top_players(&self.players) {
            lines.push(Line::from(format!(
                "  #{} {} — {} pts — {}",
                p.current_rank,
                p.name,
                fmt_thousands(p.points),
                p.recent_highlight()
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Recent champions".bold()));
        for s in self.spotlights.iter().take(3) {
            lines.push(Line::from(format!(
                "  {} — {} ({})",
                s.player_name, s.tournament_name, s.category_label
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(
            "Type 'page tournaments' to browse, or press Tab for all commands.".italic(),
        ));

        let home = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" rally hub  "),
        );
        frame.render_widget(home, area);
    }

    fn make_tournament_row(&self, idx: usize, t: &Tournament) -> Row<'static> {
        let status = if self.registrations.is_registered(&t.id) {
            "Registered".to_string()
        } else if !t.registration_open {
            "Closed".to_string()
        } else if t.is_full() {
            "Full".to_string()
        } else if t.is_closing_soon(self.today) {
            format!("Closes in {}d", t.days_until_deadline(self.today).max(0))
        } else {
            "Open".to_string()
        };

        let categories = t
            .categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");

        let mut row = Row::new(vec![
            Cell::new(Text::from(format!("{}", idx + 1)).alignment(Alignment::Right)),
            Cell::new(t.name.clone()),
            Cell::new(fmt_date_range(t.start_date, t.end_date)),
            Cell::new(t.location.clone()),
            Cell::new(categories),
            Cell::new(t.skill_level.to_string()),
            Cell::new(Text::from(format!("${}", t.entry_fee)).alignment(Alignment::Right)),
            Cell::new(
                Text::from(format!("{}/{}", t.spots_left, t.total_spots))
                    .alignment(Alignment::Right),
            ),
            Cell::new(status),
        ]);
        if self.registrations.is_registered(&t.id) {
            row = row.bold().light_green();
        }
        row
    }

    fn draw_tournaments(&self, frame: &mut Frame, area: Rect) {
        let visible = self.visible_tournaments();
        let active = self.tournament_filters.active_count();
        let search = &self.tournament_filters.search;

        let mut summary = format!(" {} tournaments found", visible.len());
        if !search.is_empty() {
            summary.push_str(&format!(" for \"{search}\""));
        }
        if active > 0 {
            summary.push_str(&format!(" with {active} filters"));
        }
        summary.push_str("  ");

        if visible.is_empty() {
            self.draw_empty_state(frame, area, " tournaments  ", "No tournaments found");
            return;
        }

        let table = Table::new(
            visible
                .iter()
                .enumerate()
                .map(|(idx, t)| self.make_tournament_row(idx, t)),
            [
                Constraint::Max(3),
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Max(6),
                Constraint::Max(7),
                Constraint::Fill(2),
            ],
        )
        .header(
            Row::new(vec![
                "#", "tournament", "dates", "location", "events", "skill", "fee", "spots",
                "status",
            ])
            .bold(),
        )
        .block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" tournaments  ")
                .title_bottom(summary),
        );
        frame.render_widget(table, area);
    }

    fn draw_tournament_detail(&self, frame: &mut Frame, area: Rect) {
        let Some(t) = self.opened_tournament() else {
            return;
        };

        let register_line = if self.registrations.is_registered(&t.id) {
            Line::from("You are registered for this event.".light_green())
        } else if !t.registration_open {
            Line::from("Registration is closed.".light_red())
        } else if t.is_full() {
            Line::from("Tournament full — no spots left.".light_red())
        } else {
            Line::from(format!(
                "Type 'register' to sign up — ${} entry, {} spots left.",
                t.entry_fee, t.spots_left
            ))
        };

        let categories = t
            .categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let lines = vec![
            Line::from(t.name.clone().bold()),
            Line::from(format!(
                "{} | {}",
                t.location,
                fmt_date_range(t.start_date, t.end_date)
            )),
            Line::from(""),
            Line::from(format!("Events:        {categories}")),
            Line::from(format!("Skill level:   {}", t.skill_level)),
            Line::from(format!("Entry fee:     ${}", t.entry_fee)),
            Line::from(format!(
                "Spots:         {} of {} remaining ({} registered)",
                t.spots_left,
                t.total_spots,
                t.spots_taken()
            )),
            Line::from(format!(
                "Deadline:      {} ({} days)",
                t.registration_deadline.format("%B %-d, %Y"),
                t.days_until_deadline(self.today)
            )),
            Line::from(format!("Organized by:  {}", t.organizer)),
            Line::from(""),
            register_line,
            Line::from(""),
            Line::from("Commands: register | share | back".italic()),
        ];

        let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" tournament details  "),
        );
        frame.render_widget(detail, area);
    }

    fn draw_schedule(&self, frame: &mut Frame, area: Rect) {
        let [tabs_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

        // Tab strip with per-tab counts.
        let mut tab_spans: Vec<Span> = vec![" ".into()];
        for tab in ScheduleTab::ALL {
            let count = self
                .matches
                .iter()
                .filter(|m| {
                    ScheduleFilters {
                        tab,
                        ..self.schedule_filters.clone()
                    }
                    .matches(m, self.today)
                })
                .count();
            let label = format!(" {tab} ({count}) ");
            if tab == self.schedule_filters.tab {
                tab_spans.push(label.bold().light_green());
            } else {
                tab_spans.push(label.into());
            }
        }
        frame.render_widget(Paragraph::new(Line::from(tab_spans)), tabs_area);

        let visible = self.visible_matches();
        if visible.is_empty() {
            self.draw_empty_state(frame, list_area, " schedule  ", "No matches found");
            return;
        }

        let live = live_matches(&self.matches);
        let mut items: Vec<ListItem> = Vec::new();
        if !live.is_empty() && self.schedule_filters.tab != ScheduleTab::Completed {
            items.push(ListItem::new(Line::from(
                format!("● Live Now ({})", live.len()).light_red().bold(),
            )));
        }

        let mut idx = 0;
        for group in self.day_groups() {
            let counts = group.status_counts();
            let mut summary = Vec::new();
            if counts.live > 0 {
                summary.push(format!("{} live", counts.live));
            }
            if counts.scheduled > 0 {
                summary.push(format!("{} scheduled", counts.scheduled));
            }
            if counts.completed > 0 {
                summary.push(format!("{} completed", counts.completed));
            }
            items.push(ListItem::new(Line::from(vec![
                day_label(group.date, self.today).bold(),
                format!("  — {}", summary.join(", ")).into(),
            ])));

            for m in &group.matches {
                idx += 1;
                let detail = match (m.status, &m.live, &m.score) {
                    (MatchStatus::Live, Some(live), _) => format!(
                        "LIVE set {}: {}-{}",
                        live.current_set, live.side_a, live.side_b
                    ),
                    (MatchStatus::Completed, _, Some(score)) => format!(
                        "{} won {}-{} ({})",
                        m.winner_name().unwrap_or("—"),
                        score.sets_a.max(score.sets_b),
                        score.sets_a.min(score.sets_b),
                        fmt_set_scores(score)
                    ),
                    _ => m.status.to_string(),
                };
                let line = format!(
                    "  {:>2}. {} {} — {} {} {} — {}, {} — {}",
                    idx,
                    m.time.format("%H:%M"),
                    m.billing(),
                    m.category,
                    m.gender,
                    m.age_group,
                    m.venue,
                    m.court,
                    detail
                );
                let item = match m.status {
                    MatchStatus::Live => ListItem::new(Line::from(line.light_red())),
                    MatchStatus::Completed => ListItem::new(Line::from(line.dark_gray())),
                    _ => ListItem::new(Line::from(line)),
                };
                items.push(item);
            }
        }

        let list = List::new(items).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" schedule  ")
                .title_bottom(format!(" {} matches found  ", visible.len())),
        );
        frame.render_widget(list, list_area);
    }

    fn draw_rankings(&self, frame: &mut Frame, area: Rect) {
        let [tabs_area, podium_area, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .areas(area);

        let mut tab_spans: Vec<Span> = vec![" ".into()];
        for tab in RankingTab::ALL {
            let label = format!(" {} ({}) ", tab, player::tab_count(&self.players, tab));
            if tab == self.ranking_tab {
                tab_spans.push(label.bold().light_green());
            } else {
                tab_spans.push(label.into());
            }
        }
        frame.render_widget(Paragraph::new(Line::from(tab_spans)), tabs_area);

        let ranked = self.ranked_players();
        if ranked.is_empty() {
            self.draw_empty_state(frame, table_area, " leaderboard  ", "No players ranked");
            return;
        }

        // Top-three podium.
        let podium_slots: [Rect; 3] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(podium_area);
        for (slot, p) in podium_slots.iter().zip(ranked.iter().take(3)) {
            let card = Paragraph::new(vec![
                Line::from(format!("#{} {}", p.current_rank, p.name).bold()),
                Line::from(format!(
                    "{} pts | {}W-{}L",
                    fmt_thousands(p.points),
                    p.wins,
                    p.losses
                )),
                Line::from(p.recent_highlight().to_string().italic()),
            ])
            .alignment(Alignment::Center)
            .block(Block::bordered());
            frame.render_widget(card, *slot);
        }

        let rows = ranked.iter().map(|p| {
            let verified = if p.is_verified() { " ✓" } else { "" };
            Row::new(vec![
                Cell::new(
                    Text::from(format!("#{}", p.current_rank)).alignment(Alignment::Right),
                ),
                Cell::new(format!("{}{verified}", p.name)),
                Cell::new(format!("{}, {}", p.city, p.region)),
                Cell::new(p.category.to_string()),
                Cell::new(p.age_group.to_string()),
                Cell::new(
                    Text::from(fmt_thousands(p.points)).alignment(Alignment::Right),
                ),
                Cell::new(
                    Text::from(format!("{}", p.matches_played)).alignment(Alignment::Right),
                ),
                Cell::new(format!("{}W-{}L", p.wins, p.losses)),
                Cell::new(
                    Text::from(format!("{}%", p.win_rate_percent()))
                        .alignment(Alignment::Right),
                ),
                match p.rank_change {
                    n if n > 0 => Cell::new(fmt_rank_change(n)).light_green(),
                    n if n < 0 => Cell::new(fmt_rank_change(n)).light_red(),
                    n => Cell::new(fmt_rank_change(n)),
                },
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Max(5),
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Max(4),
                Constraint::Max(7),
                Constraint::Max(8),
                Constraint::Fill(1),
                Constraint::Max(6),
                Constraint::Max(4),
            ],
        )
        .header(
            Row::new(vec![
                "rank", "player", "location", "event", "age", "points", "matches", "record",
                "win %", "±",
            ])
            .bold(),
        )
        .block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" leaderboard  ")
                .title_bottom(format!(" {} players ranked  ", ranked.len())),
        );
        frame.render_widget(table, table_area);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let groups = self.result_groups();
        if groups.is_empty() {
            self.draw_empty_state(frame, area, " results  ", "No results found");
            return;
        }

        let mut items: Vec<ListItem> = Vec::new();
        items.push(ListItem::new(Line::from("Winner spotlight".bold())));
        for s in self.spotlights.iter().take(3) {
            let prize = s
                .prize_money
                .map(|amount| format!(" — ${}", fmt_thousands(amount)))
                .unwrap_or_default();
            items.push(ListItem::new(Line::from(
                format!(
                    "  ★ {} — {} {} — {}{}",
                    s.player_name, s.tournament_name, s.category_label, s.achievement, prize
                )
                .light_yellow(),
            )));
        }
        items.push(ListItem::new(Line::from("")));

        for (idx, group) in groups.iter().enumerate() {
            let t = &group.tournament;
            let expanded = self.expanded_groups.contains(&t.id);
            let marker = if expanded { "▾" } else { "▸" };
            let prize = t
                .total_prize_money
                .map(|amount| format!(" — ${} prize pool", fmt_thousands(amount)))
                .unwrap_or_default();
            items.push(ListItem::new(Line::from(
                format!(
                    "{:>2}. {marker} {} — {} — {} — {} — {} results{prize}",
                    idx + 1,
                    t.name,
                    t.tier,
                    fmt_date_range(t.start_date, t.end_date),
                    t.location,
                    group.matches.len()
                )
                .bold(),
            )));
            if expanded {
                for m in &group.matches {
                    items.push(ListItem::new(Line::from(format!(
                        "      {} {} {} {}: {} def. {} {}-{} ({}) — {} min",
                        m.stage,
                        m.category,
                        m.gender,
                        m.age_group,
                        m.winner_name(),
                        m.loser_name(),
                        m.score.sets_a.max(m.score.sets_b),
                        m.score.sets_a.min(m.score.sets_b),
                        fmt_set_scores(&m.score),
                        m.duration_mins
                    ))));
                }
            }
        }

        let total: usize = groups.iter().map(|g| g.matches.len()).sum();
        let list = List::new(items).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" results  ")
                .title_bottom(format!(
                    " {} results across {} tournaments — 'expand N' for score breakdowns  ",
                    total,
                    groups.len()
                )),
        );
        frame.render_widget(list, area);
    }

    fn draw_players(&self, frame: &mut Frame, area: Rect) {
        let [stats_area, table_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

        let stats = player::directory_stats(&self.players);
        frame.render_widget(
            Paragraph::new(Line::from(format!(
                " {} players | {} active (30d) | {}% avg win rate | {} matches played",
                stats.total, stats.active, stats.average_win_rate, stats.total_matches
            ))),
            stats_area,
        );

        let visible = self.visible_players();
        if visible.is_empty() {
            self.draw_empty_state(frame, table_area, " players  ", "No players found");
            return;
        }

        // Sort indicators on the sortable columns.
        let header_for = |field: SortField, label: &str| -> String {
            match self.player_sort {
                Some(sort) if sort.field == field => match sort.direction {
                    SortDirection::Ascending => format!("{label} ↑"),
                    SortDirection::Descending => format!("{label} ↓"),
                },
                _ => label.to_string(),
            }
        };

        let rows = visible.iter().enumerate().map(|(idx, p)| {
            let verified = if p.is_verified() { " ✓" } else { "" };
            Row::new(vec![
                Cell::new(Text::from(format!("{}", idx + 1)).alignment(Alignment::Right)),
                Cell::new(
                    Text::from(format!("#{}", p.current_rank)).alignment(Alignment::Right),
                ),
                Cell::new(format!("{}{verified}", p.name)),
                Cell::new(format!("{}, {}", p.city, p.region)),
                Cell::new(p.category.to_string()),
                Cell::new(p.age_group.to_string()),
                Cell::new(
                    Text::from(fmt_thousands(p.points)).alignment(Alignment::Right),
                ),
                Cell::new(
                    Text::from(format!("{}%", p.win_rate_percent()))
                        .alignment(Alignment::Right),
                ),
                Cell::new(
                    Text::from(format!("{}", p.matches_played)).alignment(Alignment::Right),
                ),
                Cell::new(p.recent_highlight().to_string()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Max(3),
                Constraint::Max(5),
                Constraint::Fill(3),
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Max(4),
                Constraint::Max(7),
                Constraint::Max(7),
                Constraint::Max(8),
                Constraint::Fill(3),
            ],
        )
        .header(
            Row::new(vec![
                "#".to_string(),
                "rank".to_string(),
                "player".to_string(),
                "location".to_string(),
                "event".to_string(),
                "age".to_string(),
                header_for(SortField::Points, "points"),
                header_for(SortField::WinRate, "win %"),
                header_for(SortField::MatchesPlayed, "matches"),
                "recent highlight".to_string(),
            ])
            .bold(),
        )
        .block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" players  ")
                .title_bottom(format!(" {} players found  ", visible.len())),
        );
        frame.render_widget(table, table_area);
    }

    fn draw_player_profile(&self, frame: &mut Frame, area: Rect) {
        let Some(p) = self.opened_player() else {
            return;
        };

        let verified = if p.is_verified() { " ✓ verified" } else { "" };
        let mut lines = vec![
            Line::from(format!("{}{verified}", p.name).bold()),
            Line::from(format!(
                "#{} overall | {} pts ({}) | {}W-{}L | {}% win rate",
                p.current_rank,
                fmt_thousands(p.points),
                fmt_rank_change(p.rank_change),
                p.wins,
                p.losses,
                p.win_rate_percent()
            )),
            Line::from(format!(
                "{}, {} | {} {} {} | age {} | playing since {}",
                p.city,
                p.region,
                p.category,
                p.gender,
                p.age_group,
                p.age(),
                p.playing_since()
            )),
            Line::from(""),
            Line::from(p.bio().to_string()),
            Line::from(""),
            Line::from("Achievements".bold()),
        ];
        if p.achievements.is_empty() {
            lines.push(Line::from("  Tournament Participant"));
            lines.push(Line::from("  Ranked Player"));
        } else {
            for achievement in &p.achievements {
                lines.push(Line::from(format!("  {achievement}")));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Tournament history".bold()));
        if p.tournament_history.is_empty() {
            lines.push(Line::from("  No recorded events yet"));
        } else {
            for entry in &p.tournament_history {
                lines.push(Line::from(format!(
                    "  {} — {} — {} ({}) — {}",
                    entry.date.format("%b %-d, %Y"),
                    entry.tournament_name,
                    entry.result,
                    entry.category,
                    entry.location
                )));
            }
        }
        let socials: Vec<String> = [
            p.socials.instagram.as_ref().map(|s| format!("instagram {s}")),
            p.socials.twitter.as_ref().map(|s| format!("twitter {s}")),
            p.socials.facebook.as_ref().map(|s| format!("facebook {s}")),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !socials.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(socials.join(" | ")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Commands: share | back".italic()));

        let profile = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" player profile  "),
        );
        frame.render_widget(profile, area);
    }

    fn draw_empty_state(&self, frame: &mut Frame, area: Rect, title: &str, message: &str) {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(message.to_string().bold()),
            Line::from("Try adjusting your filters or search terms."),
            Line::from(""),
            Line::from("Type 'reset' to clear all filters.".italic()),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(title.to_string()),
        );
        frame.render_widget(empty, area);
    }

    /// Render the log/history window with scrollbar
    fn draw_log(&mut self, frame: &mut Frame, area: Rect) {
        let log_records = self.log_handle.list_items.clone();
        let log_records = List::new(log_records)
            .direction(ListDirection::BottomToTop)
            .block(Block::bordered().title(" activity  "));
        frame.render_stateful_widget(log_records, area, &mut self.log_handle.list_state);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.log_handle.scroll_state,
        );
    }

    /// Render the user input area
    fn draw_user_input(&self, frame: &mut Frame, area: Rect) {
        let user_input = Paragraph::new(self.user_input.value.as_str())
            .style(Style::default())
            .block(
                Block::bordered()
                    .title(format!(" {}@rally-hub  ", self.user).light_green()),
            );
        frame.render_widget(user_input, area);
        frame.set_cursor_position(Position::new(
            area.x + self.user_input.char_idx as u16 + 1,
            area.y + 1,
        ));
    }

    /// Render the help/status bar at the bottom
    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let registered = self.registrations.len();
        let help_message = vec![
            format!("● {}", self.page).light_green(),
            format!(" | {registered} registered | press ").into(),
            "Tab".bold().white(),
            " to view help, press ".into(),
            "Enter".bold().white(),
            " to run a command, or press ".into(),
            "Esc".bold().white(),
            " to go back / exit".into(),
        ];
        let help_message = Paragraph::new(Line::from(help_message));
        frame.render_widget(help_message, area);
    }

    /// Render the help menu overlay
    fn draw_help_menu(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Max(36)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(92)]).flex(Flex::Center);
        let [help_menu_area] = vertical.areas(frame.area());
        let [help_menu_area] = horizontal.areas(help_menu_area);
        frame.render_widget(Clear, help_menu_area);

        let help_items = self.help_handle.list_items.clone();
        let help_items = List::new(help_items)
            .direction(ListDirection::BottomToTop)
            .block(Block::bordered().title(" commands  "));
        frame.render_stateful_widget(help_items, help_menu_area, &mut self.help_handle.list_state);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .symbols(scrollbar::VERTICAL)
                .begin_symbol(None)
                .end_symbol(None),
            help_menu_area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.help_handle.scroll_state,
        );
    }

    /// Main draw function - orchestrates rendering of all UI components
    fn draw(&mut self, frame: &mut Frame) {
        let window = Layout::vertical([
            Constraint::Min(6),    // Content + log
            Constraint::Length(3), // User input area
            Constraint::Length(1), // Help bar
        ]);
        let [top_area, user_input_area, help_area] = window.areas(frame.area());

        let [content_area, log_area] =
            Layout::vertical([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(top_area);

        self.draw_content(frame, content_area);
        self.draw_log(frame, log_area);
        self.draw_user_input(frame, user_input_area);
        self.draw_help_bar(frame, help_area);

        if self.show_help_menu {
            self.draw_help_menu(frame);
        }
    }

    /// Run the TUI application
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_TIMEOUT)?
                && let Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind,
                    ..
                }) = event::read()?
                && kind == KeyEventKind::Press
            {
                match modifiers {
                    KeyModifiers::CONTROL => match code {
                        KeyCode::Home => self.log_handle.jump_to_first(),
                        KeyCode::End => self.log_handle.jump_to_last(),
                        _ => {}
                    },
                    KeyModifiers::NONE | KeyModifiers::SHIFT => match code {
                        KeyCode::Enter => {
                            let user_input = self.user_input.submit();
                            self.handle_input(&user_input);
                        }
                        KeyCode::Char(to_insert) => self.user_input.input(to_insert),
                        KeyCode::Backspace => self.user_input.backspace(),
                        KeyCode::Delete => self.user_input.delete(),
                        KeyCode::Left => self.user_input.move_left(),
                        KeyCode::Right => self.user_input.move_right(),
                        KeyCode::Up => {
                            if self.show_help_menu {
                                self.help_handle.move_up();
                            } else {
                                self.log_handle.move_up();
                            }
                        }
                        KeyCode::Down => {
                            if self.show_help_menu {
                                self.help_handle.move_down();
                            } else {
                                self.log_handle.move_down();
                            }
                        }
                        KeyCode::Home => self.user_input.jump_to_first(),
                        KeyCode::End => self.user_input.jump_to_last(),
                        KeyCode::Tab => self.show_help_menu = !self.show_help_menu,
                        KeyCode::Esc => {
                            if self.show_help_menu {
                                self.show_help_menu = false;
                            } else if self.detail_open() {
                                self.close_detail();
                            } else {
                                return Ok(());
                            }
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fmt_thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(2840), "2,840");
        assert_eq!(fmt_thousands(1_200_000), "1,200,000");
    }

    #[test]
    fn test_fmt_date_range() {
        assert_eq!(
            fmt_date_range(date(2024, 8, 15), date(2024, 8, 18)),
            "Aug 15 - 18, 2024"
        );
        assert_eq!(
            fmt_date_range(date(2024, 8, 30), date(2024, 9, 2)),
            "Aug 30 - Sep 2, 2024"
        );
    }

    #[test]
    fn test_fmt_rank_change() {
        assert_eq!(fmt_rank_change(3), "+3");
        assert_eq!(fmt_rank_change(-1), "-1");
        assert_eq!(fmt_rank_change(0), "—");
    }
}
