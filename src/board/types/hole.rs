//! Hole contents and seed colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seed colors. A Transparent seed keeps its color when sown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedColor {
    Red,
    Blue,
    Transparent,
}

/// Seeds held by a single hole, one counter per color.
///
/// Counters are `u8`: a standard game never puts more than 32 seeds of one
/// color in play. Sowing into a counter already at 255 is rejected with
/// `MoveError::SeedOverflow`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hole {
    pub red: u8,
    pub blue: u8,
    pub transparent: u8,
}

impl Hole {
    pub const EMPTY: Hole = Hole::new(0, 0, 0);

    /// Standard starting contents: two seeds of each color.
    pub const INITIAL: Hole = Hole::new(2, 2, 2);

    #[inline]
    #[must_use]
    pub const fn new(red: u8, blue: u8, transparent: u8) -> Self {
        Hole {
            red,
            blue,
            transparent,
        }
    }

    /// Total seeds of all colors.
    #[inline]
    #[must_use]
    pub const fn total(self) -> u32 {
        self.red as u32 + self.blue as u32 + self.transparent as u32
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.total() == 0
    }

    #[inline]
    #[must_use]
    pub const fn count(self, color: SeedColor) -> u8 {
        match color {
            SeedColor::Red => self.red,
            SeedColor::Blue => self.blue,
            SeedColor::Transparent => self.transparent,
        }
    }

    #[inline]
    fn slot_mut(&mut self, color: SeedColor) -> &mut u8 {
        match color {
            SeedColor::Red => &mut self.red,
            SeedColor::Blue => &mut self.blue,
            SeedColor::Transparent => &mut self.transparent,
        }
    }

    /// Drop one seed in. `None` if that color's counter is full.
    #[inline]
    #[must_use]
    pub(crate) fn add(&mut self, color: SeedColor) -> Option<()> {
        let slot = self.slot_mut(color);
        *slot = slot.checked_add(1)?;
        Some(())
    }

    /// Remove every seed of one color, returning how many there were.
    #[inline]
    pub(crate) fn take(&mut self, color: SeedColor) -> u8 {
        std::mem::take(self.slot_mut(color))
    }

    /// Empty the hole, returning how many seeds it held.
    #[inline]
    pub(crate) fn clear(&mut self) -> u32 {
        let total = self.total();
        *self = Hole::EMPTY;
        total
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}R {}B {}T", self.red, self.blue, self.transparent)
    }
}
