//! A pickleball tournament browser TUI.
//!
//! Browse tournaments, the match schedule, rankings, player profiles, and
//! past results from the terminal. All data is the bundled catalog; the
//! registered-tournament set lives for the session only.

use anyhow::Result;
use pico_args::Arguments;

use rh_client::commands::Page;
use rh_client::tui_app::TuiApp;

const HELP: &str = "\
Browse pickleball tournaments, schedules, rankings, and results

USAGE:
  rh_client [OPTIONS]

OPTIONS:
  --user NAME           Name shown on the prompt  [default: login user]
  --page NAME           Starting page  [default: tournaments]

FLAGS:
  -h, --help            Print help information
";

struct Args {
    user: String,
    page: Page,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        user: pargs
            .value_from_str("--user")
            .unwrap_or_else(|_| whoami::username()),
        page: pargs
            .value_from_str("--page")
            .unwrap_or(Page::Tournaments),
    };

    run(args)
}

fn run(args: Args) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    log::debug!("starting on the {} page as {}", args.page, args.user);
    let app = TuiApp::new(args.user, args.page, today);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result
}
