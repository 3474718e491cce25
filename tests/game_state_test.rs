//! Tests for game state transitions: placement, turn order, and reset.

use tictactoe_tui::{GameState, GameStatus, Placement, Player, Position, Square};

/// Plays out a sequence of positions, panicking on an ignored move.
fn play(game: &mut GameState, moves: &[Position]) -> Placement {
    let mut last = Placement::Ignored;
    for &pos in moves {
        last = game.place(pos);
        assert_ne!(last, Placement::Ignored, "move at {} was ignored", pos);
    }
    last
}

#[test]
fn x_wins_left_column() {
    let mut game = GameState::new();

    // X: 0, 3, 6 and O: 1, 4 - X completes the left column.
    let last = play(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ],
    );

    assert_eq!(
        last,
        Placement::Finished {
            mark: Player::X,
            winner: Some(Player::X),
            game_number: 1,
        }
    );
    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn full_board_without_winner_is_a_draw() {
    let mut game = GameState::new();

    let last = play(
        &mut game,
        &[
            Position::TopLeft,      // X
            Position::Center,       // O
            Position::TopRight,     // X
            Position::TopCenter,    // O
            Position::MiddleLeft,   // X
            Position::MiddleRight,  // O
            Position::BottomCenter, // X
            Position::BottomLeft,   // O
            Position::BottomRight,  // X fills the board
        ],
    );

    assert_eq!(
        last,
        Placement::Finished {
            mark: Player::X,
            winner: None,
            game_number: 1,
        }
    );
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn turn_alternates_after_each_placement() {
    let mut game = GameState::new();
    assert_eq!(game.turn(), Player::X);

    match game.place(Position::Center) {
        Placement::InProgress { mark, next } => {
            assert_eq!(mark, Player::X);
            assert_eq!(next, Player::O);
        }
        other => panic!("unexpected placement: {:?}", other),
    }
    assert_eq!(game.turn(), Player::O);

    game.place(Position::TopLeft);
    assert_eq!(game.turn(), Player::X);
}

#[test]
fn occupied_square_is_a_no_op() {
    let mut game = GameState::new();
    game.place(Position::Center);

    let before = game.clone();
    assert_eq!(game.place(Position::Center), Placement::Ignored);

    // Board, turn, and counter are all untouched.
    assert_eq!(game, before);
    assert_eq!(game.turn(), Player::O);
    assert_eq!(
        game.board().get(Position::Center),
        Square::Occupied(Player::X)
    );
}

#[test]
fn finished_game_ignores_further_placements() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight, // X wins the top row
        ],
    );
    assert!(game.is_over());

    let before = game.clone();
    assert_eq!(game.place(Position::BottomRight), Placement::Ignored);
    assert_eq!(game, before);
}

#[test]
fn reset_restores_initial_board_and_turn() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[Position::Center, Position::TopLeft, Position::BottomRight],
    );
    game.reset();

    assert_eq!(game.turn(), Player::X);
    assert!(!game.is_over());
    assert_eq!(game.status(), GameStatus::InProgress);
    for pos in Position::ALL {
        assert_eq!(game.board().get(pos), Square::Empty);
    }
}

#[test]
fn game_number_advances_only_on_completion() {
    let mut game = GameState::new();
    assert_eq!(game.game_number(), 1);

    // Resetting an unfinished game does not consume a number.
    game.place(Position::Center);
    game.reset();
    assert_eq!(game.game_number(), 1);

    // First finished game is number 1; the session moves on to 2.
    let last = play(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert!(matches!(last, Placement::Finished { game_number: 1, .. }));
    assert_eq!(game.game_number(), 2);

    game.reset();
    assert_eq!(game.game_number(), 2);

    let last = play(
        &mut game,
        &[
            Position::BottomLeft,
            Position::TopCenter,
            Position::BottomCenter,
            Position::Center,
            Position::BottomRight,
        ],
    );
    assert!(matches!(last, Placement::Finished { game_number: 2, .. }));
    assert_eq!(game.game_number(), 3);
}
