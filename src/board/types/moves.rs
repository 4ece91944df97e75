//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hole::SeedColor;

/// Which seeds of the source hole a move picks up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selector {
    Red,
    Blue,
    /// Transparent seeds first, then the Red seeds, sown like Red.
    TransparentAsRed,
    /// Transparent seeds first, then the Blue seeds, sown like Blue.
    TransparentAsBlue,
}

/// Which holes may receive a sown seed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Targeting {
    /// Every hole except the source.
    AllHoles,
    /// Only holes owned by the mover's opponent.
    OpponentHoles,
}

impl Selector {
    /// All selectors in generation order
    pub const ALL: [Selector; 4] = [
        Selector::Red,
        Selector::Blue,
        Selector::TransparentAsRed,
        Selector::TransparentAsBlue,
    ];

    #[inline]
    #[must_use]
    pub const fn targeting(self) -> Targeting {
        match self {
            Selector::Red | Selector::TransparentAsRed => Targeting::AllHoles,
            Selector::Blue | Selector::TransparentAsBlue => Targeting::OpponentHoles,
        }
    }

    /// The color that must be present in the source hole for the move to be legal.
    #[inline]
    #[must_use]
    pub const fn required_color(self) -> SeedColor {
        match self {
            Selector::Red => SeedColor::Red,
            Selector::Blue => SeedColor::Blue,
            Selector::TransparentAsRed | Selector::TransparentAsBlue => SeedColor::Transparent,
        }
    }

    /// The colored seeds picked up besides any Transparent ones.
    #[inline]
    #[must_use]
    pub const fn base_color(self) -> SeedColor {
        match self {
            Selector::Red | Selector::TransparentAsRed => SeedColor::Red,
            Selector::Blue | Selector::TransparentAsBlue => SeedColor::Blue,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Selector::TransparentAsRed | Selector::TransparentAsBlue)
    }

    /// Notation suffix: `R`, `B`, `TR` or `TB`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Selector::Red => "R",
            Selector::Blue => "B",
            Selector::TransparentAsRed => "TR",
            Selector::TransparentAsBlue => "TB",
        }
    }

    /// Parse a notation suffix, ignoring ASCII case.
    #[must_use]
    pub fn from_notation(s: &str) -> Option<Selector> {
        Selector::ALL
            .into_iter()
            .find(|sel| sel.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move: play the selected seeds of one hole (0-based index).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    hole: u8,
    selector: Selector,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(hole: u8, selector: Selector) -> Self {
        Move { hole, selector }
    }

    /// 0-based hole index
    #[inline]
    #[must_use]
    pub const fn hole(self) -> usize {
        self.hole as usize
    }

    #[inline]
    #[must_use]
    pub const fn selector(self) -> Selector {
        self.selector
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

/// Formats as the 1-based match notation, e.g. `3R` or `15TB`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.hole() + 1, self.selector)
    }
}

/// Upper bound on legal moves in one position: 8 holes, 4 selectors each.
pub(crate) const MAX_MOVES: usize = 32;
const EMPTY_MOVE: Move = Move::new(0, Selector::Red);

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.as_slice().first().copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_is_one_based() {
        assert_eq!(Move::new(0, Selector::Red).to_string(), "1R");
        assert_eq!(Move::new(14, Selector::TransparentAsBlue).to_string(), "15TB");
    }

    #[test]
    fn test_selector_targeting() {
        assert_eq!(Selector::Red.targeting(), Targeting::AllHoles);
        assert_eq!(Selector::TransparentAsRed.targeting(), Targeting::AllHoles);
        assert_eq!(Selector::Blue.targeting(), Targeting::OpponentHoles);
        assert_eq!(
            Selector::TransparentAsBlue.targeting(),
            Targeting::OpponentHoles
        );
    }

    #[test]
    fn test_selector_notation_case_insensitive() {
        assert_eq!(Selector::from_notation("tb"), Some(Selector::TransparentAsBlue));
        assert_eq!(Selector::from_notation("R"), Some(Selector::Red));
        assert_eq!(Selector::from_notation("T"), None);
    }

    #[test]
    fn test_move_list_push_and_iter() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::new(2, Selector::Blue));
        list.push(Move::new(4, Selector::Red));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], Move::new(4, Selector::Red));
        assert!(list.contains(Move::new(2, Selector::Blue)));
        let collected: Vec<Move> = list.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
