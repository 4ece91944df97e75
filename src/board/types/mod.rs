//! Core game types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Hole` and `SeedColor` - the three-color contents of a board hole
//! - `Seat` - the two players and the parity rule for hole ownership
//! - `Move`, `Selector` and `MoveList` - move representation

mod hole;
mod moves;
mod seat;

pub use hole::{Hole, SeedColor};
pub use moves::{Move, MoveList, MoveListIntoIter, Selector, Targeting};
pub use seat::Seat;

/// Number of holes on the ring.
pub const NUM_HOLES: usize = 16;
