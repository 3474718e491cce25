//! Terminal UI for tic-tac-toe.
//!
//! The presentation adapter: a synchronous crossterm event loop that
//! forwards key presses into [`crate::game::GameState`] transitions and
//! projects the state back onto the screen each frame.

mod app;
mod input;
mod log;
mod ui;

pub use app::{App, Control};
pub use log::ResultLog;

use crate::cli::Cli;
use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Runs the game until the player quits.
pub fn run(cli: Cli) -> Result<()> {
    // Log to a file so tracing output never fights the TUI for the terminal.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let mut settings = Settings::load(&cli.settings)
        .with_context(|| format!("failed to load settings from {}", cli.settings.display()))?;
    if let Some(theme) = cli.theme {
        debug!(theme = theme.label(), "theme overridden on the command line");
        settings.set_theme(theme);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings, cli.settings);
    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "game loop error");
    }
    res
}

/// Draw-then-poll loop: one synchronous state transition per key press.
fn run_game<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key.code) == Control::Quit {
                info!("player quit");
                return Ok(());
            }
        }
    }
}
