//! Capture chain tests.

use crate::board::{GameStateBuilder, Hole, Move, Seat, Selector, NUM_HOLES};

#[test]
fn test_chain_starts_at_last_sown_hole() {
    // Hole 3 sows its two Transparent seeds into holes 4 and 5. Hole 4 now
    // holds 3 seeds, but the last seed landed in hole 5 (1 seed), so the
    // chain never starts.
    let mut state = GameStateBuilder::new()
        .hole(3, Hole::new(0, 0, 2))
        .hole(4, Hole::new(1, 1, 0))
        .side_to_move(Seat::Second)
        .build();
    let outcome = state
        .apply_move(Move::new(3, Selector::TransparentAsRed))
        .expect("legal");

    assert_eq!(outcome.last_hole, 5);
    assert_eq!(outcome.captured, 0);
    assert_eq!(state.hole(4), Some(Hole::new(1, 1, 1)));
    assert_eq!(state.scores(), [0, 0]);
}

#[test]
fn test_chain_captures_consecutive_holes_backwards() {
    // Same sowing, but hole 5 already holds a seed: hole 5 (2 seeds) and
    // hole 4 (3 seeds) are captured, the emptied source hole 3 ends the chain.
    let mut state = GameStateBuilder::new()
        .hole(3, Hole::new(0, 0, 2))
        .hole(4, Hole::new(1, 1, 0))
        .hole(5, Hole::new(1, 0, 0))
        .hole(6, Hole::new(4, 0, 0))
        .side_to_move(Seat::Second)
        .build();
    let outcome = state
        .apply_move(Move::new(3, Selector::TransparentAsRed))
        .expect("legal");

    assert_eq!(outcome.captured, 5);
    assert_eq!(state.score(Seat::Second), 5);
    assert_eq!(state.score(Seat::First), 0);
    assert_eq!(state.hole(4), Some(Hole::EMPTY));
    assert_eq!(state.hole(5), Some(Hole::EMPTY));
    assert_eq!(state.hole(6), Some(Hole::new(4, 0, 0)));
    assert_eq!(state.total_seeds(), 9);
}

#[test]
fn test_chain_stops_at_four_seeds() {
    let mut state = GameStateBuilder::new()
        .hole(0, Hole::new(2, 0, 0))
        .hole(1, Hole::new(3, 1, 0))
        .hole(2, Hole::new(1, 0, 0))
        .build();
    // Seeds land in holes 1 (now 5) and 2 (now 2): only hole 2 is captured.
    let outcome = state.apply_move(Move::new(0, Selector::Red)).expect("legal");

    assert_eq!(outcome.captured, 2);
    assert_eq!(state.hole(1), Some(Hole::new(4, 1, 0)));
    assert_eq!(state.hole(2), Some(Hole::EMPTY));
}

#[test]
fn test_capture_can_take_own_holes() {
    // Red sows everywhere, so the capture chain may run through the mover's
    // own holes too.
    let mut state = GameStateBuilder::new()
        .hole(0, Hole::new(2, 0, 0))
        .hole(1, Hole::new(0, 2, 0))
        .hole(2, Hole::new(0, 0, 1))
        .build();
    let outcome = state.apply_move(Move::new(0, Selector::Red)).expect("legal");

    assert_eq!(outcome.last_hole, 2);
    assert_eq!(outcome.captured, 5);
    assert_eq!(state.score(Seat::First), 5);
}

#[test]
fn test_chain_is_bounded_by_full_ring() {
    // Every hole ends at 2 seeds, including the source which keeps its Blue
    // pair: the chain sweeps the whole ring exactly once.
    let mut builder = GameStateBuilder::new()
        .hole(0, Hole::new(1, 2, 0))
        .hole(1, Hole::new(1, 0, 0));
    for i in 2..NUM_HOLES {
        builder = builder.hole(i, Hole::new(2, 0, 0));
    }
    let mut state = builder.build();
    let total = state.total_seeds();

    let outcome = state.apply_move(Move::new(0, Selector::Red)).expect("legal");

    assert_eq!(outcome.captured, 32);
    assert_eq!(state.score(Seat::First), 32);
    assert_eq!(state.seeds_on_board(), 0);
    assert_eq!(state.total_seeds(), total);
}

#[test]
fn test_capture_credits_mover_only() {
    let mut state = GameStateBuilder::new()
        .hole(1, Hole::new(1, 0, 0))
        .hole(2, Hole::new(1, 0, 0))
        .scores(3, 4)
        .side_to_move(Seat::Second)
        .build();
    state.apply_move(Move::new(1, Selector::Red)).expect("legal");
    assert_eq!(state.scores(), [3, 6]);
}
