use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs,
    io::{self, stdin, Read, Stdout, Write},
    path::PathBuf,
    time::Duration,
};
use textstat::{
    analysis::{analyze, ViewState},
    app::{App, Settings},
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    logging,
    report::{write_report, Format},
    runtime::{CrosstermEventSource, EventSource, Runner},
    theme::Theme,
};
use tracing::{error, info};

/// Ticks only drive the cross-instance theme sync.
const TICK_RATE_MS: u64 = 250;

/// live text statistics: counts, reading time and letter density
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type or paste text and watch character, word and sentence counts, reading time and per-letter density update as you type. With --report (or piped input) the same analysis is printed once and the program exits."
)]
pub struct Cli {
    /// do not count spaces toward the total character count
    #[clap(short = 'x', long)]
    exclude_spaces: bool,

    /// truncate input beyond this many characters
    #[clap(short = 'l', long)]
    limit: Option<u32>,

    /// start with the given theme instead of the saved one
    #[clap(short = 't', long, value_enum)]
    theme: Option<Theme>,

    /// path to the config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// print a one-shot report instead of starting the tui
    #[clap(short = 'r', long)]
    report: bool,

    /// read text from this file (report mode) or preload it (tui)
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// report output format
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// show the full letter density table instead of the top five
    #[clap(short = 'e', long)]
    expanded: bool,
}

impl Cli {
    /// Stored settings with command line overrides applied on top.
    fn settings(&self, store: &dyn ConfigStore) -> Settings {
        let mut settings = Settings::from_config(&store.load());
        if self.exclude_spaces {
            settings.exclude_spaces = true;
        }
        if self.limit.is_some() {
            settings.char_limit = self.limit;
        }
        if self.theme.is_some() {
            settings.theme = self.theme;
        }
        settings.expanded = self.expanded;
        settings
    }

    fn store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    fn read_input(&self) -> io::Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path),
            None => {
                let mut buf = String::new();
                stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let store = cli.store();

    if cli.report || !stdin().is_tty() {
        logging::init_stderr();
        return run_report(&cli, &store);
    }

    if let Some(path) = AppDirs::log_path() {
        logging::init_file(&path);
    }

    let mut settings = cli.settings(&store);
    if let Some(path) = &cli.input {
        settings.text = fs::read_to_string(path)?;
    }
    info!(config = %store.path().display(), "starting tui");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(settings, Box::new(store));
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);
    let restored = restore_terminal(terminal.backend_mut());

    if let Err(e) = &result {
        error!(error = %e, "tui exited with an error");
    }
    restored?;
    result
}

/// Raw mode, alternate screen and bracketed paste. Anything already switched
/// on is undone if a later step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if let Err(e) = &terminal {
        error!(error = %e, "terminal setup failed");
        let _ = restore_terminal(&mut stdout);
    }
    terminal
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen, Show)?;
    Ok(())
}

fn run_report(cli: &Cli, store: &FileConfigStore) -> Result<(), Box<dyn Error>> {
    let text = cli.read_input()?;
    let settings = cli.settings(store);
    let analysis = analyze(
        &text,
        &settings.options(),
        ViewState {
            expanded: settings.expanded,
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&analysis, cli.format, &mut out)?;
    Ok(())
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while !app.should_quit {
        if app.handle_event(runner.step()) && !app.should_quit {
            terminal.draw(|f| f.render_widget(&*app, f.area()))?;
        }
    }

    Ok(())
}
