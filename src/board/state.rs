use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Hole, Seat, NUM_HOLES};

/// Seeds on the board at the start of a standard game (16 holes of 2+2+2).
pub const INITIAL_SEEDS: u32 = 96;

/// Full game state: board, scores, side to move and move counter.
///
/// `GameState` is a plain value. Cloning it (see [`GameState::snapshot`])
/// yields a fully detached copy, which is what the search relies on to
/// explore sibling branches independently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) holes: [Hole; NUM_HOLES],
    pub(crate) scores: [u32; 2],
    pub(crate) side_to_move: Seat,
    pub(crate) moves_played: u32,
}

impl GameState {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            holes: [Hole::INITIAL; NUM_HOLES],
            scores: [0, 0],
            side_to_move: Seat::First,
            moves_played: 0,
        }
    }

    pub(crate) fn empty() -> Self {
        GameState {
            holes: [Hole::EMPTY; NUM_HOLES],
            scores: [0, 0],
            side_to_move: Seat::First,
            moves_played: 0,
        }
    }

    /// Independent deep copy for speculative play.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    #[inline]
    #[must_use]
    pub fn holes(&self) -> &[Hole; NUM_HOLES] {
        &self.holes
    }

    /// Contents of a hole, or `None` for an index outside 0-15.
    #[inline]
    #[must_use]
    pub fn hole(&self, index: usize) -> Option<Hole> {
        self.holes.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    #[inline]
    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Seat {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Total seeds left on the board.
    #[must_use]
    pub fn seeds_on_board(&self) -> u32 {
        self.holes.iter().map(|h| h.total()).sum()
    }

    /// Seeds in the holes owned by `seat`.
    #[must_use]
    pub fn seeds_of(&self, seat: Seat) -> u32 {
        seat.holes().map(|i| self.holes[i].total()).sum()
    }

    /// Board seeds plus both scores. Constant across legal moves.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.seeds_on_board() + self.scores[0] + self.scores[1]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "move: {}", self.moves_played + 1)?;
        writeln!(f, "to move: {}", self.side_to_move)?;
        for seat in Seat::BOTH {
            writeln!(f, "score {seat}: {}", self.score(seat))?;
        }
        for (i, hole) in self.holes.iter().enumerate() {
            let owner = match Seat::owner_of(i) {
                Seat::First => "p1",
                Seat::Second => "p2",
            };
            writeln!(f, "hole {:2} ({owner}): {hole}", i + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counts() {
        let state = GameState::new();
        assert_eq!(state.seeds_on_board(), INITIAL_SEEDS);
        assert_eq!(state.seeds_of(Seat::First), INITIAL_SEEDS / 2);
        assert_eq!(state.total_seeds(), INITIAL_SEEDS);
        assert_eq!(state.hole(16), None);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let state = GameState::new();
        let mut copy = state.snapshot();
        copy.holes[0] = Hole::EMPTY;
        copy.scores[1] = 6;
        assert_eq!(state.hole(0), Some(Hole::INITIAL));
        assert_eq!(state.scores(), [0, 0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_roundtrip() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
