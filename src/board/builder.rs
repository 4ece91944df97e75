//! Fluent builder for constructing game positions.
//!
//! Allows creating positions hole by hole rather than replaying moves.
//!
//! # Example
//! ```
//! use awale_engine::board::{GameStateBuilder, Hole, Seat};
//!
//! let state = GameStateBuilder::new()
//!     .hole(2, Hole::new(0, 0, 2))
//!     .hole(3, Hole::new(1, 1, 0))
//!     .scores(10, 4)
//!     .side_to_move(Seat::First)
//!     .build();
//! assert_eq!(state.seeds_on_board(), 4);
//! ```

use super::{GameState, Hole, Seat, NUM_HOLES};

/// A fluent builder for constructing `GameState` positions.
///
/// Starts from an empty board; holes with an index outside 0-15 are ignored.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    state: GameState,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a builder with every hole empty, scores at zero, `Seat::First` to move.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            state: GameState::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            state: GameState::new(),
        }
    }

    /// Set one hole. Out-of-range indices are ignored.
    ///
    /// A color counter left at 255 makes any move sowing that color into
    /// the hole fail with `MoveError::SeedOverflow`.
    #[must_use]
    pub fn hole(mut self, index: usize, hole: Hole) -> Self {
        if let Some(slot) = self.state.holes.get_mut(index) {
            *slot = hole;
        }
        self
    }

    /// Set all sixteen holes at once.
    #[must_use]
    pub fn holes(mut self, holes: [Hole; NUM_HOLES]) -> Self {
        self.state.holes = holes;
        self
    }

    #[must_use]
    pub fn scores(mut self, first: u32, second: u32) -> Self {
        self.state.scores = [first, second];
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, seat: Seat) -> Self {
        self.state.side_to_move = seat;
        self
    }

    #[must_use]
    pub fn moves_played(mut self, moves: u32) -> Self {
        self.state.moves_played = moves;
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_empty_board() {
        let state = GameStateBuilder::new().build();
        assert_eq!(state.seeds_on_board(), 0);
        assert_eq!(state.side_to_move(), Seat::First);
    }

    #[test]
    fn test_builder_starting_position_matches_new() {
        assert_eq!(GameStateBuilder::starting_position().build(), GameState::new());
    }

    #[test]
    fn test_builder_ignores_out_of_range_hole() {
        let state = GameStateBuilder::new().hole(16, Hole::INITIAL).build();
        assert_eq!(state.seeds_on_board(), 0);
    }

    #[test]
    fn test_builder_sets_fields() {
        let state = GameStateBuilder::new()
            .hole(5, Hole::new(1, 2, 3))
            .scores(7, 9)
            .side_to_move(Seat::Second)
            .moves_played(12)
            .build();
        assert_eq!(state.hole(5), Some(Hole::new(1, 2, 3)));
        assert_eq!(state.scores(), [7, 9]);
        assert_eq!(state.side_to_move(), Seat::Second);
        assert_eq!(state.moves_played(), 12);
    }
}
