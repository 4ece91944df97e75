//! End-of-game detection.

use std::fmt;

use super::{GameState, Seat};

/// A seat reaching this score wins outright.
pub const WINNING_SCORE: u32 = 49;

/// The game ends once fewer than this many seeds remain on the board.
pub const MIN_BOARD_SEEDS: u32 = 10;

/// The game ends after this many moves.
pub const MAX_MOVES: u32 = 400;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// A seat collected `WINNING_SCORE` seeds
    ScoreThreshold,
    /// Fewer than `MIN_BOARD_SEEDS` seeds left on the board
    BoardExhausted,
    /// `MAX_MOVES` moves played
    MoveLimit,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Seat),
    Draw,
}

/// Whether the game is still running, and if not how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Over { outcome: Outcome, reason: EndReason },
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameStatus::Over {
                outcome: Outcome::Win(seat),
                ..
            } => Some(seat),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (outcome, reason) = match self {
            GameStatus::Ongoing => return write!(f, "in progress"),
            GameStatus::Over { outcome, reason } => (outcome, reason),
        };
        match outcome {
            Outcome::Win(seat) => write!(f, "{seat} wins")?,
            Outcome::Draw => write!(f, "Draw")?,
        }
        match reason {
            EndReason::ScoreThreshold => Ok(()),
            EndReason::BoardExhausted => write!(f, " (board < {MIN_BOARD_SEEDS})"),
            EndReason::MoveLimit => write!(f, " ({MAX_MOVES} moves limit)"),
        }
    }
}

impl GameState {
    /// Check the end-of-game conditions, in order: score threshold, board
    /// exhaustion, move limit. Pure; does not alter the state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        for seat in Seat::BOTH {
            if self.score(seat) >= WINNING_SCORE {
                return GameStatus::Over {
                    outcome: Outcome::Win(seat),
                    reason: EndReason::ScoreThreshold,
                };
            }
        }

        if self.seeds_on_board() < MIN_BOARD_SEEDS {
            return GameStatus::Over {
                outcome: self.leader(),
                reason: EndReason::BoardExhausted,
            };
        }

        if self.moves_played >= MAX_MOVES {
            return GameStatus::Over {
                outcome: self.leader(),
                reason: EndReason::MoveLimit,
            };
        }

        GameStatus::Ongoing
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    fn leader(&self) -> Outcome {
        let [first, second] = self.scores;
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Win(Seat::First),
            std::cmp::Ordering::Less => Outcome::Win(Seat::Second),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let status = GameStatus::Over {
            outcome: Outcome::Win(Seat::First),
            reason: EndReason::ScoreThreshold,
        };
        assert_eq!(status.to_string(), "Player 1 wins");

        let status = GameStatus::Over {
            outcome: Outcome::Draw,
            reason: EndReason::MoveLimit,
        };
        assert_eq!(status.to_string(), "Draw (400 moves limit)");
    }

    #[test]
    fn test_new_game_is_ongoing() {
        let status = GameState::new().status();
        assert_eq!(status, GameStatus::Ongoing);
        assert!(!status.is_over());
        assert_eq!(status.winner(), None);
    }
}
