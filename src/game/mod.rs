//! Pure tic-tac-toe game logic.

mod position;
mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::WIN_TRIPLES;
pub use state::{GameState, Placement};
pub use types::{Board, GameStatus, Player, Square};
