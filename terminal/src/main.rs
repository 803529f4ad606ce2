use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

use engine::GameConfig;
use terminal::app::{App, AppCommand};

fn main() -> Result<()> {
    // stdout belongs to the raw-mode terminal, so logs go to a file.
    let log_path = std::env::temp_dir().join("snake-terminal.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file at {:?}", log_path))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    // Optional `rows cols` arguments, otherwise the 20x20 default.
    let mut args = std::env::args().skip(1);
    let mut config = GameConfig::default();
    if let Some(rows) = args.next() {
        config.rows = rows.parse().context("rows must be a positive integer")?;
    }
    if let Some(cols) = args.next() {
        config.cols = cols.parse().context("cols must be a positive integer")?;
    }

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;

    // Config validation fails here, before the terminal is touched.
    let mut app = App::new(config, seed)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.update(Instant::now());

        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(AppCommand::Quit) = app.handle_input(key) {
                    return Ok(());
                }
            }
        }
    }
}
