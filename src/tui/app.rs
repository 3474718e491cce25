//! Application state and logic.

use super::log::ResultLog;
use crate::game::{GameState, Placement, Player, Position};
use crate::settings::{Settings, Theme};
use crossterm::event::KeyCode;
use std::path::PathBuf;
use tracing::{debug, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameState,
    cursor: Position,
    status_message: String,
    results: ResultLog,
    settings: Settings,
    settings_path: PathBuf,
}

impl App {
    /// Creates a new application with loaded settings.
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            status_message: turn_message(Player::X),
            results: ResultLog::new(),
            settings,
            settings_path,
        }
    }

    /// Gets the current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square currently under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the result log.
    pub fn results(&self) -> &ResultLog {
        &self.results
    }

    /// Active color theme.
    pub fn theme(&self) -> Theme {
        *self.settings.theme()
    }

    /// Handles a key press, returning whether to keep running.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Cells are numbered 1-9 on screen, indices 0-8 underneath.
                if let Some(pos) = (c.to_digit(10))
                    .map(|d| d as usize)
                    .filter(|d| (1..=9).contains(d))
                    .and_then(|d| Position::from_index(d - 1))
                {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = super::input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Attempts to place the current player's mark at `pos`.
    fn select(&mut self, pos: Position) {
        match self.game.place(pos) {
            Placement::Ignored => {
                debug!(pos = %pos, "click ignored");
            }
            Placement::InProgress { mark, next } => {
                debug!(mark = %mark, pos = %pos, "mark placed");
                self.status_message = turn_message(next);
            }
            Placement::Finished {
                winner,
                game_number,
                ..
            } => {
                let result = result_message(winner);
                self.results.record(game_number, &result);
                self.status_message =
                    format!("{} Press 'r' for the next game or 'q' to quit.", result);
            }
        }
    }

    /// Starts the next game.
    pub fn restart(&mut self) {
        debug!(game = self.game.game_number(), "restarting");
        self.results.on_restart(self.game.game_number());
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = turn_message(Player::X);
    }

    /// Flips the theme and persists the flag.
    ///
    /// A write failure keeps the new theme for this session and warns on
    /// the status line instead of aborting.
    pub fn toggle_theme(&mut self) {
        let theme = self.theme().toggle();
        self.settings.set_theme(theme);
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(error = %e, "failed to persist theme");
            self.status_message = format!("Theme not saved: {}", e.message);
        }
    }
}

fn turn_message(player: Player) -> String {
    format!("{} to move.", player)
}

fn result_message(winner: Option<Player>) -> String {
    match winner {
        Some(player) => format!("{} wins!", player),
        None => "Draw!".to_string(),
    }
}
