//! FormulaSpeed - Average Speed Calculator
//!
//! A terminal form that computes average speed from distance and time,
//! lists every result in a table and saves the table to `results.xlsx`.

use std::io;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use formulaspeed::application::App;
use formulaspeed::presentation::{render_ui, Control, InputHandler};

/// Entry point for the FormulaSpeed application.
///
/// Sets up the terminal interface, runs the event loop until the user
/// quits, and restores the terminal afterwards.
///
/// # Errors
///
/// Returns an error if terminal setup or teardown fails.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Logs go to a file because stdout belongs to the UI. Nothing is logged
/// unless `RUST_LOG` is set.
fn init_logging() -> anyhow::Result<()> {
    let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let path = std::env::temp_dir().join("formulaspeed.log");
    let file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    tracing::info!(path = %path.display(), "formulaspeed log started");
    Ok(())
}

/// Main application event loop.
///
/// Every key press is handled synchronously before the next frame is drawn.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press
                && InputHandler::handle_key_event(app, key.code, key.modifiers) == Control::Quit
            {
                return Ok(());
            }
        }
    }
}
