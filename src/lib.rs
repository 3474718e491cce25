//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Game**: pure board, turn, and outcome logic with no UI knowledge
//! - **Tui**: ratatui/crossterm presentation adapter that forwards input
//!   into game transitions and renders the result
//! - **Settings**: light/dark theme flag persisted to a TOML file
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{GameState, Placement, Player, Position};
//!
//! let mut game = GameState::new();
//! match game.place(Position::Center) {
//!     Placement::InProgress { next, .. } => assert_eq!(next, Player::O),
//!     _ => unreachable!(),
//! }
//! // Placing on an occupied square changes nothing.
//! assert_eq!(game.place(Position::Center), Placement::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod settings;
pub mod tui;

pub use cli::Cli;
pub use game::{Board, GameState, GameStatus, Placement, Player, Position, Square};
pub use settings::{Settings, SettingsError, Theme};
pub use tui::ResultLog;
