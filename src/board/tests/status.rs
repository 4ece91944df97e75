//! End-of-game detection tests.

use crate::board::{
    EndReason, GameState, GameStateBuilder, GameStatus, Hole, Outcome, Seat, MAX_MOVES,
};

fn board_with_seeds(seeds: u8) -> GameStateBuilder {
    GameStateBuilder::new().hole(6, Hole::new(seeds, 0, 0))
}

#[test]
fn test_score_threshold_wins_regardless_of_move_count() {
    let state = GameStateBuilder::starting_position()
        .scores(49, 0)
        .moves_played(MAX_MOVES + 50)
        .build();
    assert_eq!(
        state.status(),
        GameStatus::Over {
            outcome: Outcome::Win(Seat::First),
            reason: EndReason::ScoreThreshold,
        }
    );
    assert_eq!(state.status().to_string(), "Player 1 wins");
}

#[test]
fn test_second_seat_score_threshold() {
    let state = board_with_seeds(20).scores(30, 50).build();
    assert_eq!(state.status().winner(), Some(Seat::Second));
}

#[test]
fn test_low_board_seeds_leader_wins() {
    let state = board_with_seeds(9).scores(20, 15).build();
    assert_eq!(state.seeds_on_board(), 9);
    assert_eq!(
        state.status(),
        GameStatus::Over {
            outcome: Outcome::Win(Seat::First),
            reason: EndReason::BoardExhausted,
        }
    );
}

#[test]
fn test_low_board_seeds_draw() {
    let state = board_with_seeds(4).scores(30, 30).build();
    assert_eq!(
        state.status(),
        GameStatus::Over {
            outcome: Outcome::Draw,
            reason: EndReason::BoardExhausted,
        }
    );
}

#[test]
fn test_ten_seeds_is_not_exhausted() {
    let state = board_with_seeds(10).scores(40, 30).build();
    assert_eq!(state.status(), GameStatus::Ongoing);
}

#[test]
fn test_move_limit() {
    let state = GameStateBuilder::starting_position()
        .moves_played(MAX_MOVES)
        .build();
    assert_eq!(
        state.status(),
        GameStatus::Over {
            outcome: Outcome::Draw,
            reason: EndReason::MoveLimit,
        }
    );

    let state = board_with_seeds(30).scores(10, 12).moves_played(MAX_MOVES).build();
    assert_eq!(state.status().winner(), Some(Seat::Second));

    let state = GameStateBuilder::starting_position()
        .moves_played(MAX_MOVES - 1)
        .build();
    assert!(!state.is_game_over());
}

#[test]
fn test_status_is_pure() {
    let state = board_with_seeds(3).scores(1, 2).build();
    let before = state.clone();
    let _ = state.status();
    let _ = state.status();
    assert_eq!(state, before);
    assert_ne!(GameState::new().status(), state.status());
}
