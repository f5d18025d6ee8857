use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use pickpack::{
    app::{App, AppSettings, Control},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    generator::{RandomSource, RngSource},
    logging::init_file_logging,
    runtime::{CrosstermEventSource, FixedTicker, GameEventSource, Runner, Ticker},
    terminal::TerminalGuard,
    ui::screen::{current_screen, Screen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::info;

const FRAME_RATE_MS: u64 = 100;

/// warehouse pick & pack mini-game with a short 3PL explainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Pick the shelves that match the current order before the 60 second timer runs out. Matches score 10, misses cost 5. Beat 500 to win the challenge."
)]
pub struct Cli {
    /// seed for reproducible grids and orders
    #[clap(long)]
    seed: Option<u64>,

    /// draw item tags as ASCII instead of emoji
    #[clap(long)]
    ascii: bool,

    /// open on the "How 3PL works" screen
    #[clap(long)]
    info: bool,

    /// write logs here instead of the default state directory
    #[clap(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// remember --ascii / --info for future runs
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// CLI flags switch preferences on; the config file supplies the rest
    fn to_settings(&self, cfg: &Config) -> AppSettings {
        AppSettings {
            ascii_icons: self.ascii || cfg.ascii_icons,
            start_on_info: self.info || cfg.start_on_info,
            ..AppSettings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        if let Err(e) = init_file_logging(&path) {
            eprintln!("warning: logging disabled: {e}");
        }
    }

    let store = FileConfigStore::new();
    let settings = cli.to_settings(&store.load());
    if cli.save_config {
        store.save(&Config::from(&settings))?;
        info!(path = %store.path().display(), "preferences saved");
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(FRAME_RATE_MS)),
    );
    let mut app = App::new(RngSource(rng), runner.sender(), settings);

    let mut guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &runner, &mut app);
    // stop the countdown before handing the terminal back
    drop(app);
    guard.restore()?;

    result
}

fn start_tui<B: Backend, E: GameEventSource, T: Ticker, S: RandomSource + 'static>(
    terminal: &mut Terminal<B>,
    runner: &Runner<E, T>,
    app: &mut App<S>,
) -> Result<(), Box<dyn Error>> {
    info!("ui started");
    terminal.draw(|f| ui(app, f))?;

    loop {
        let event = runner.step();
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        match app.handle_event(event, area) {
            Control::Quit => break,
            Control::Redraw => {
                terminal.draw(|f| ui(app, f))?;
            }
            Control::Idle => {}
        }
    }

    info!(score = app.session().score, "ui closed");
    Ok(())
}

fn ui<S: RandomSource + 'static>(app: &App<S>, f: &mut Frame) {
    current_screen(&app.state).render(app, f);
}
