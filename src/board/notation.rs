//! Match notation for moves.
//!
//! A move is written as the 1-based hole number followed by the seed
//! selector: `R`, `B`, `TR` (Transparent played as Red) or `TB`
//! (Transparent played as Blue). Examples: "3R", "15TB".
//!
//! # Examples
//! ```
//! use awale_engine::board::{GameState, Move, Selector};
//!
//! let mv: Move = "3TR".parse().unwrap();
//! assert_eq!(mv, Move::new(2, Selector::TransparentAsRed));
//! assert_eq!(mv.to_string(), "3TR");
//!
//! let state = GameState::new();
//! assert!(state.parse_move("2R").is_err()); // hole 2 belongs to the second player
//! ```

use std::str::FromStr;

use super::error::MoveParseError;
use super::{GameState, Move, Selector, NUM_HOLES};

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        if notation.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let split = notation
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(notation.len());
        let (digits, suffix) = notation.split_at(split);

        let hole = digits
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=NUM_HOLES).contains(n))
            .ok_or_else(|| MoveParseError::InvalidHole {
                notation: notation.to_string(),
            })?;

        let selector =
            Selector::from_notation(suffix).ok_or_else(|| MoveParseError::InvalidSelector {
                notation: notation.to_string(),
            })?;

        // 1..=16 checked above, fits in u8
        Ok(Move::new((hole - 1) as u8, selector))
    }
}

impl GameState {
    /// Parse a move in match notation and check it is legal here.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.validate_move(mv)
            .map_err(|reason| MoveParseError::Illegal {
                notation: notation.trim().to_string(),
                reason,
            })?;
        Ok(mv)
    }
}
