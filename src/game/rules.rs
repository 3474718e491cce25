//! Win and draw detection.

use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};

/// The 8 winning triples: rows, then columns, then diagonals.
///
/// Scan order is fixed; the first uniform non-empty triple decides the
/// winner (ties are impossible since a square holds one mark).
pub const WIN_TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

impl Board {
    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares().iter().all(|s| *s != Square::Empty)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        for [a, b, c] in WIN_TRIPLES {
            let occ = self.get(a);

            if occ != Square::Empty && occ == self.get(b) && occ == self.get(c) {
                return match occ {
                    Square::Occupied(p) => Some(p),
                    Square::Empty => None,
                };
            }
        }

        None
    }
}

impl GameStatus {
    /// Computes the status as a pure function of the board.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
