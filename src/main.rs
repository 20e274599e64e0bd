use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
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
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};

use slovo::{
    app::{App, Control},
    config::{ConfigStore, FileConfigStore, Overrides, RuntimeSettings, Theme},
    logging,
    runtime::{AppEvent, CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    ui,
};

/// word puzzle tui: build words from a letter grid against the clock
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Assemble words from a grid of Cyrillic letters or by typing, check them, and race a countdown."
)]
pub struct Cli {
    /// length of a round in seconds
    #[clap(short = 's', long)]
    round_secs: Option<u32>,

    /// start with hints switched on
    #[clap(long)]
    hints: bool,

    /// color theme
    #[clap(short = 't', long, value_enum)]
    theme: Option<Theme>,

    /// config file to use instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            round_secs: self.round_secs,
            hints: self.hints,
            theme: self.theme,
        }
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = logging::init();

    let store = cli.config_store();
    let settings = RuntimeSettings::resolve(&store.load(), &cli.overrides());
    tracing::info!(?settings, config = %store.path().display(), "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, Box::new(store));
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(%err, "exited with error");
    }
    result
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    let mut last = Instant::now();
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let event = runner.step();

        let now = Instant::now();
        app.on_elapsed(now - last);
        last = now;

        match event {
            AppEvent::Tick | AppEvent::Resize => {}
            AppEvent::Closed => {
                tracing::warn!("terminal event source closed");
                break;
            }
            AppEvent::Key(key) => {
                if app.on_key(key) == Control::Quit {
                    break;
                }
            }
        }

        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use slovo::runtime::TestEventSource;
    use std::{sync::mpsc, time::Duration};

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["slovo"]);
        assert_eq!(cli.round_secs, None);
        assert!(!cli.hints);
        assert_eq!(cli.theme, None);
        assert_eq!(cli.config, None);
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn test_cli_round_secs() {
        let cli = Cli::parse_from(["slovo", "-s", "30"]);
        assert_eq!(cli.round_secs, Some(30));

        let cli = Cli::parse_from(["slovo", "--round-secs", "120"]);
        assert_eq!(cli.round_secs, Some(120));
    }

    #[test]
    fn test_cli_theme_and_hints() {
        let cli = Cli::parse_from(["slovo", "--theme", "light", "--hints"]);
        assert_eq!(cli.theme, Some(Theme::Light));
        assert!(cli.hints);

        let cli = Cli::parse_from(["slovo", "-t", "dark"]);
        assert_eq!(cli.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_cli_rejects_bad_theme() {
        assert!(Cli::try_parse_from(["slovo", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_cli_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let cli = Cli::parse_from(["slovo", "--config", path.to_str().unwrap()]);
        assert_eq!(cli.config_store().path(), path.as_path());
    }

    #[test]
    fn test_start_tui_quits_on_escape() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        let mut app = App::new(RuntimeSettings::default(), Box::new(store));

        let (tx, rx) = mpsc::channel();
        for c in "дом".chars() {
            tx.send(AppEvent::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )))
            .unwrap();
        }
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .unwrap();

        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_millis(5)),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        start_tui(&mut terminal, &mut app, &runner).unwrap();
        assert_eq!(app.game.current_word(), "дом");
    }

    #[test]
    fn test_start_tui_returns_when_source_closes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        let mut app = App::new(RuntimeSettings::default(), Box::new(store));

        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('я'),
            KeyModifiers::NONE,
        )))
        .unwrap();
        drop(tx);

        // a long tick proves the loop exits on hang-up rather than on timeout
        let runner = Runner::new(
            TestEventSource::new(rx),
            FixedTicker::new(Duration::from_secs(60)),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        start_tui(&mut terminal, &mut app, &runner).unwrap();
        assert_eq!(app.game.current_word(), "я");
    }
}
