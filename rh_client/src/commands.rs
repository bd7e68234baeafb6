use chrono::NaiveDate;
use rally_hub::divisions::{AgeGroup, Category, Gender, SkillLevel, Stage};
use rally_hub::player::{RankTier, SortField};
use rally_hub::tournament::{DateWindow, RegistrationStatus, Usd};
use std::{fmt, str::FromStr};

/// Browsing pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Home,
    Tournaments,
    Schedule,
    Rankings,
    Results,
    Players,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Tournaments,
        Page::Schedule,
        Page::Rankings,
        Page::Results,
        Page::Players,
    ];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Home => "home",
            Self::Tournaments => "tournaments",
            Self::Schedule => "schedule",
            Self::Rankings => "rankings",
            Self::Results => "results",
            Self::Players => "players",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "tournaments" => Ok(Self::Tournaments),
            "schedule" => Ok(Self::Schedule),
            "rankings" | "leaderboard" => Ok(Self::Rankings),
            "results" => Ok(Self::Results),
            "players" => Ok(Self::Players),
            _ => Err(ParseError::UnknownPage(s.to_string())),
        }
    }
}

/// One `filter FIELD [VALUE]` argument. A `None` payload clears the field.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterArg {
    Location(Option<String>),
    Category(Option<Category>),
    Skill(Option<SkillLevel>),
    Gender(Option<Gender>),
    Age(Option<AgeGroup>),
    Region(Option<String>),
    Status(Option<RegistrationStatus>),
    Window(Option<DateWindow>),
    Stage(Option<Stage>),
    Tournament(Option<String>),
    Year(Option<i32>),
    Date(Option<NaiveDate>),
    Tier(Option<RankTier>),
    Fee(Option<(Usd, Usd)>),
}

impl FilterArg {
    /// Field name as typed in the command.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Location(_) => "location",
            Self::Category(_) => "category",
            Self::Skill(_) => "skill",
            Self::Gender(_) => "gender",
            Self::Age(_) => "age",
            Self::Region(_) => "region",
            Self::Status(_) => "status",
            Self::Window(_) => "window",
            Self::Stage(_) => "stage",
            Self::Tournament(_) => "tournament",
            Self::Year(_) => "year",
            Self::Date(_) => "date",
            Self::Tier(_) => "tier",
            Self::Fee(_) => "fee",
        }
    }
}

/// A parsed user command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Switch to a page.
    Go(Page),
    /// Set or clear the current page's search query.
    Search(Option<String>),
    /// Set or clear one filter field on the current page.
    Filter(FilterArg),
    /// Select a rankings or schedule tab.
    Tab(String),
    /// Toggle a players-directory sort column.
    Sort(SortField),
    /// Open the n-th listing's detail view (1-based).
    Open(usize),
    /// Leave the open detail view.
    Back,
    /// Register for the n-th listed tournament, or for the open detail
    /// view when no index is given.
    Register(Option<usize>),
    /// Toggle a results group open or closed (1-based).
    Expand(usize),
    /// The load-more placeholder.
    More,
    /// Serialize the open detail record into the log.
    Share,
    /// Clear the current page's filters.
    Reset,
}

/// Errors that can occur during command parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// Command needs an argument it didn't get.
    MissingArgument(&'static str),
    /// Listing index is not a positive number.
    InvalidIndex(String),
    /// A filter value that doesn't parse for its field.
    InvalidValue {
        field: &'static str,
        value: String,
    },
    /// Fee filter needs two bounds.
    InvalidFeeRange(String),
    /// Unparseable calendar date.
    InvalidDate(String),
    /// Unknown page name.
    UnknownPage(String),
    /// Unknown filter field.
    UnknownFilterField(String),
    /// Unknown sort column.
    UnknownSortField(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument(usage) => {
                write!(f, "Missing argument. Usage: {usage}")
            }
            Self::InvalidIndex(value) => write!(
                f,
                "Invalid listing number '{value}'. Use the number shown in the first column (e.g., 'open 2')"
            ),
            Self::InvalidValue { field, value } => {
                write!(f, "'{value}' is not a valid {field} value")
            }
            Self::InvalidFeeRange(value) => write!(
                f,
                "Invalid fee range '{value}'. Use two whole-dollar bounds (e.g., 'filter fee 60 100')"
            ),
            Self::InvalidDate(value) => write!(
                f,
                "Invalid date '{value}'. Use YYYY-MM-DD (e.g., 'filter date 2024-09-20')"
            ),
            Self::UnknownPage(page) => write!(
                f,
                "Unknown page '{page}'. Pages: home, tournaments, schedule, rankings, results, players"
            ),
            Self::UnknownFilterField(field) => write!(
                f,
                "Unknown filter field '{field}'. Press Tab to see the fields each page supports"
            ),
            Self::UnknownSortField(field) => write!(
                f,
                "Unknown sort column '{field}'. Columns: points, winrate, matches"
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{cmd}'. Press Tab to see available commands"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a [`Command`].
///
/// # Examples
///
/// ```
/// use rh_client::commands::{Command, Page, parse_command};
///
/// assert!(matches!(parse_command("page rankings"), Ok(Command::Go(Page::Rankings))));
/// assert!(matches!(parse_command("open 2"), Ok(Command::Open(2))));
/// assert!(matches!(parse_command("back"), Ok(Command::Back)));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Single-word commands first
    match trimmed.to_lowercase().as_str() {
        "back" => return Ok(Command::Back),
        "more" => return Ok(Command::More),
        "share" => return Ok(Command::Share),
        "reset" | "clear" => return Ok(Command::Reset),
        "register" => return Ok(Command::Register(None)),
        "search" => return Ok(Command::Search(None)),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts.first() {
        Some(&"page") | Some(&"go") => match parts.get(1) {
            Some(page) => Ok(Command::Go(page.parse()?)),
            None => Err(ParseError::MissingArgument("page NAME")),
        },
        Some(&"search") => Ok(Command::Search(Some(parts[1..].join(" ")))),
        Some(&"filter") => parse_filter_command(&parts),
        Some(&"tab") => match parts.get(1) {
            Some(_) => Ok(Command::Tab(parts[1..].join(" "))),
            None => Err(ParseError::MissingArgument("tab NAME")),
        },
        Some(&"sort") => parse_sort_command(&parts),
        Some(&"open") | Some(&"view") => Ok(Command::Open(parse_index(&parts, "open N")?)),
        Some(&"register") => Ok(Command::Register(Some(parse_index(&parts, "register N")?))),
        Some(&"expand") => Ok(Command::Expand(parse_index(&parts, "expand N")?)),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse a 1-based listing index: "open 3", "register 1", "expand 2".
fn parse_index(parts: &[&str], usage: &'static str) -> Result<usize, ParseError> {
    let value = parts.get(1).ok_or(ParseError::MissingArgument(usage))?;
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidIndex((*value).to_string())),
    }
}

/// Parse a filter command: "filter FIELD [VALUE...]". No value clears the
/// field back to its no-constraint default.
fn parse_filter_command(parts: &[&str]) -> Result<Command, ParseError> {
    let field = parts
        .get(1)
        .ok_or(ParseError::MissingArgument("filter FIELD [VALUE]"))?;
    let rest = parts[2..].join(" ");
    let value = (!rest.is_empty()).then_some(rest);

    let arg = match field.to_lowercase().as_str() {
        "location" => FilterArg::Location(value),
        "region" => FilterArg::Region(value),
        "tournament" => FilterArg::Tournament(value),
        "category" => FilterArg::Category(parse_value("category", value)?),
        "skill" => FilterArg::Skill(parse_value("skill", value)?),
        "gender" => FilterArg::Gender(parse_value("gender", value)?),
        "age" => FilterArg::Age(parse_value("age", value)?),
        "status" => FilterArg::Status(parse_value("status", value)?),
        "window" => FilterArg::Window(parse_value("window", value)?),
        "stage" => FilterArg::Stage(parse_value("stage", value)?),
        "tier" => FilterArg::Tier(parse_value("tier", value)?),
        "year" => FilterArg::Year(parse_value("year", value)?),
        "date" => FilterArg::Date(match value {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| ParseError::InvalidDate(raw))?,
            ),
            None => None,
        }),
        "fee" => FilterArg::Fee(parse_fee(&parts[2..])?),
        _ => return Err(ParseError::UnknownFilterField((*field).to_string())),
    };
    Ok(Command::Filter(arg))
}

/// Parse a `FromStr` filter value, keeping `None` as the clear sentinel.
fn parse_value<T: FromStr>(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ParseError> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ParseError::InvalidValue { field, value: raw }),
        None => Ok(None),
    }
}

/// Parse fee bounds: "filter fee 60 100" or "filter fee" to clear.
fn parse_fee(bounds: &[&str]) -> Result<Option<(Usd, Usd)>, ParseError> {
    match bounds {
        [] => Ok(None),
        [lo, hi] => {
            let lo = lo
                .parse::<Usd>()
                .map_err(|_| ParseError::InvalidFeeRange(bounds.join(" ")))?;
            let hi = hi
                .parse::<Usd>()
                .map_err(|_| ParseError::InvalidFeeRange(bounds.join(" ")))?;
            if lo > hi {
                return Err(ParseError::InvalidFeeRange(bounds.join(" ")));
            }
            Ok(Some((lo, hi)))
        }
        _ => Err(ParseError::InvalidFeeRange(bounds.join(" "))),
    }
}

/// Parse a sort command: "sort points|winrate|matches".
fn parse_sort_command(parts: &[&str]) -> Result<Command, ParseError> {
    let column = parts
        .get(1)
        .ok_or(ParseError::MissingArgument("sort COLUMN"))?;
    let field = match column.to_lowercase().replace('-', "").as_str() {
        "points" => SortField::Points,
        "winrate" => SortField::WinRate,
        "matches" => SortField::MatchesPlayed,
        _ => return Err(ParseError::UnknownSortField((*column).to_string())),
    };
    Ok(Command::Sort(field))
}
