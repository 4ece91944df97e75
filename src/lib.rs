//! Three-color Awale: rules engine, search bot and match player.

pub mod arbiter;
pub mod board;
pub mod logger;

pub use board::{Bot, GameState, Move, SearchConfig, Seat, Selector};
