//! Error types for board operations.

use std::fmt;

use super::{Seat, Selector};

/// Error type for rejected moves. The state is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Hole index outside 0-15
    HoleOutOfRange { hole: usize },
    /// The hole belongs to the other seat
    NotYourHole { hole: usize, seat: Seat },
    /// The selected seed category is empty in that hole
    EmptySelection { hole: usize, selector: Selector },
    /// Nothing would be sown
    NothingToSow { hole: usize },
    /// A sown seed would push a color counter past 255
    SeedOverflow { hole: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::HoleOutOfRange { hole } => {
                write!(f, "Invalid hole number {}", hole + 1)
            }
            MoveError::NotYourHole { hole, seat } => {
                write!(f, "Hole {} does not belong to {seat}", hole + 1)
            }
            MoveError::EmptySelection { hole, selector } => {
                let color = match selector {
                    Selector::Red => "Red",
                    Selector::Blue => "Blue",
                    Selector::TransparentAsRed | Selector::TransparentAsBlue => "Transparent",
                };
                write!(f, "No {color} seeds in hole {}", hole + 1)
            }
            MoveError::NothingToSow { hole } => {
                write!(f, "No seeds to sow from hole {}", hole + 1)
            }
            MoveError::SeedOverflow { hole } => {
                write!(f, "Hole {} cannot hold another seed of that color", hole + 1)
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Empty move string
    Empty,
    /// Missing or non-numeric hole, or hole outside 1-16
    InvalidHole { notation: String },
    /// Selector suffix is not one of R, B, TR, TB
    InvalidSelector { notation: String },
    /// Well-formed move that is not legal in the current position
    Illegal { notation: String, reason: MoveError },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Empty move string"),
            MoveParseError::InvalidHole { notation } => {
                write!(f, "Invalid hole in move '{notation}', expected 1-16")
            }
            MoveParseError::InvalidSelector { notation } => {
                write!(f, "Invalid seed selector in move '{notation}', expected R, B, TR or TB")
            }
            MoveParseError::Illegal { notation, reason } => {
                write!(f, "Illegal move '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::Illegal { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_uses_one_based_holes() {
        let err = MoveError::HoleOutOfRange { hole: 16 };
        assert!(err.to_string().contains("17"));

        let err = MoveError::NotYourHole {
            hole: 3,
            seat: Seat::First,
        };
        assert!(err.to_string().contains("Hole 4"));
        assert!(err.to_string().contains("Player 1"));
    }

    #[test]
    fn test_empty_selection_names_color() {
        let err = MoveError::EmptySelection {
            hole: 0,
            selector: Selector::TransparentAsBlue,
        };
        assert!(err.to_string().contains("Transparent"));
    }

    #[test]
    fn test_parse_error_messages() {
        let err = MoveParseError::InvalidHole {
            notation: "17R".to_string(),
        };
        assert!(err.to_string().contains("17R"));

        let err = MoveParseError::InvalidSelector {
            notation: "3X".to_string(),
        };
        assert!(err.to_string().contains("3X"));
        assert!(MoveParseError::Empty.to_string().contains("Empty"));
    }

    #[test]
    fn test_illegal_has_source() {
        use std::error::Error;
        let err = MoveParseError::Illegal {
            notation: "2R".to_string(),
            reason: MoveError::NotYourHole {
                hole: 1,
                seat: Seat::First,
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("2R"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::NothingToSow { hole: 5 };
        assert_eq!(err.clone(), err);
    }
}
