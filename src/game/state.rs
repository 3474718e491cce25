//! Mutable game state and its transitions.

use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Report returned to the presentation adapter after a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Square was occupied or the game was already over; nothing changed.
    ///
    /// A misclick is harmless, not an error, so this is the whole story.
    Ignored,
    /// Mark was placed and the game continues.
    InProgress {
        /// The mark just placed.
        mark: Player,
        /// The player to move next.
        next: Player,
    },
    /// Mark was placed and ended the game.
    Finished {
        /// The mark just placed.
        mark: Player,
        /// The winner, or `None` for a draw.
        winner: Option<Player>,
        /// Number of the game that just finished (1-based).
        game_number: u32,
    },
}

/// Complete state of the running game session.
///
/// Holds the board, the player to move, the over-flag, and the counter of
/// games played. Created once at startup; [`GameState::reset`] starts the
/// next round without touching the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    over: bool,
    game_number: u32,
}

impl GameState {
    /// Creates a fresh session: empty board, X to move, game number 1.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            over: false,
            game_number: 1,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns true once the current game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Number of the game currently being played (1-based).
    ///
    /// Incremented once per completed game, never by [`GameState::reset`].
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Current status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// An occupied square or a finished game makes this a no-op returning
    /// [`Placement::Ignored`]. Otherwise the mark is placed and the outcome
    /// recomputed: on a win or draw the over-flag is set and the game
    /// counter advances; on a continuing game the turn flips.
    #[instrument(skip(self), fields(pos = %pos, turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Placement {
        if self.over || !self.board.is_empty(pos) {
            debug!("placement ignored");
            return Placement::Ignored;
        }

        let mark = self.turn;
        self.board.set(pos, Square::Occupied(mark));

        match GameStatus::of(&self.board) {
            GameStatus::Won(winner) => {
                let finished = self.game_number;
                self.over = true;
                self.game_number += 1;
                debug!(winner = %winner, game = finished, "game won");
                Placement::Finished {
                    mark,
                    winner: Some(winner),
                    game_number: finished,
                }
            }
            GameStatus::Draw => {
                let finished = self.game_number;
                self.over = true;
                self.game_number += 1;
                debug!(game = finished, "game drawn");
                Placement::Finished {
                    mark,
                    winner: None,
                    game_number: finished,
                }
            }
            GameStatus::InProgress => {
                self.turn = mark.opponent();
                Placement::InProgress {
                    mark,
                    next: self.turn,
                }
            }
        }
    }

    /// Clears the board for the next game: all squares empty, X to move,
    /// over-flag down. The game counter is untouched.
    #[instrument(skip(self), fields(game = self.game_number))]
    pub fn reset(&mut self) {
        debug!("resetting board");
        self.board.clear();
        self.turn = Player::X;
        self.over = false;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
