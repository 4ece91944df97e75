//! Seat (player) type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::NUM_HOLES;

/// One of the two players.
///
/// `First` owns the even hole indices (holes 1, 3, 5... in 1-based notation)
/// and moves first; `Second` owns the odd indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in index order (First=0, Second=1)
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Seat> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }

    /// Returns the other seat
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Seat owning the given hole index.
    #[inline]
    #[must_use]
    pub const fn owner_of(hole: usize) -> Seat {
        if hole % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// True if `hole` belongs to this seat.
    #[inline]
    #[must_use]
    pub const fn owns(self, hole: usize) -> bool {
        hole % 2 == self.index()
    }

    /// Iterator over this seat's hole indices in ascending order.
    pub fn holes(self) -> impl Iterator<Item = usize> {
        (self.index()..NUM_HOLES).step_by(2)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::First => write!(f, "Player 1"),
            Seat::Second => write!(f, "Player 2"),
        }
    }
}
