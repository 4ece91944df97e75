//! Awale board representation and game logic.
//!
//! Sixteen holes on a ring, each holding Red, Blue and Transparent seeds.
//! Even holes belong to the first player, odd holes to the second.
//! Provides legal move generation, sowing with capture chains, end-of-game
//! detection, and the time-boxed search that picks a move.
//!
//! # Example
//! ```
//! use awale_engine::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! state.apply_move(moves[0]).unwrap();
//! assert_eq!(state.total_seeds(), 96);
//! ```

mod builder;
mod error;
mod eval;
mod make_move;
mod movegen;
mod notation;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{MoveError, MoveParseError};
pub use make_move::MoveOutcome;
pub use state::{GameState, INITIAL_SEEDS};
pub use status::{EndReason, GameStatus, Outcome, MAX_MOVES, MIN_BOARD_SEEDS, WINNING_SCORE};
pub use types::{
    Hole, Move, MoveList, MoveListIntoIter, SeedColor, Seat, Selector, Targeting, NUM_HOLES,
};

// Public API - search functions and configuration
pub use search::{find_best_move, Bot, SearchConfig, SearchResult, SearchStats};
