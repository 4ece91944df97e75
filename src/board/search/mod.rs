//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening up to a depth cap, keeping the deepest completed result
//! - Minimax with alpha-beta pruning, evaluated from the root seat's view
//! - Shuffled root move order for variety between equal moves
//! - Cooperative deadline: polled at every node and every candidate move
//! - Snapshot-per-branch: every child is searched on its own copy of the state

mod alphabeta;
mod clock;
pub mod constants;
mod iterative;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{GameState, Move, Seat};
pub use clock::{SearchAborted, SearchClock};
use constants::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_BUDGET_MS};

/// Bot configuration: who we play, how deep, how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Seat this bot plays
    pub seat: Seat,
    /// Iterative deepening cap
    pub max_depth: u32,
    /// Wall-clock budget per move
    pub time_budget: Duration,
}

impl SearchConfig {
    #[must_use]
    pub fn new(seat: Seat) -> Self {
        SearchConfig {
            seat,
            max_depth: DEFAULT_MAX_DEPTH,
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Seat::First)
    }
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play, `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the deepest completed iteration, from the root seat's view
    pub score: Option<i32>,
    /// Deepest fully completed depth (0 = fallback move, no depth finished)
    pub depth: u32,
    /// Nodes visited across all iterations
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Statistics tracked during search, reset on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub completed_depth: u32,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Search context for a single call
pub(crate) struct SearchContext<'a> {
    /// Seat the evaluation is computed for
    pub root_seat: Seat,
    pub clock: &'a SearchClock,
    pub stats: &'a mut SearchStats,
}

/// A time-boxed player for one seat.
///
/// Holds no game state between calls; only the node counter and the
/// shuffling RNG persist.
pub struct Bot {
    config: SearchConfig,
    stats: SearchStats,
    rng: StdRng,
    cancel: Arc<AtomicBool>,
}

impl Bot {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Bot {
            config,
            stats: SearchStats::default(),
            rng: StdRng::from_entropy(),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Bot with a fixed shuffling seed, for reproducible games.
    #[must_use]
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Bot {
            rng: StdRng::seed_from_u64(seed),
            ..Bot::new(config)
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.config.seat
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Flag that cuts the current search short when set to `true`.
    ///
    /// A search that sees it set plays its deepest completed result (or the
    /// fallback move). Setting it between searches aborts the next one at
    /// once. Every search clears it before returning.
    #[must_use]
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Pick a move for the side to move, or `None` if it has no legal move.
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        self.search(state).best_move
    }

    /// Iterative deepening search within the configured time budget.
    ///
    /// Always returns a move when one exists: if no depth completes before
    /// the deadline, the first legal move is returned.
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        let result = self.run_search(state);
        self.cancel.store(false, Ordering::Relaxed);
        result
    }

    fn run_search(&mut self, state: &GameState) -> SearchResult {
        self.stats.reset();
        let clock = SearchClock::start(Some(self.config.time_budget), Arc::clone(&self.cancel));

        let mut root_moves = state.generate_moves();
        let Some(fallback) = root_moves.first() else {
            log::debug!("no legal move for {}", state.side_to_move());
            return SearchResult {
                best_move: None,
                score: None,
                depth: 0,
                nodes: 0,
                elapsed: clock.elapsed(),
            };
        };

        let root_seat = state.side_to_move();
        if root_seat != self.config.seat {
            log::warn!(
                "bot configured for {} asked to move for {}",
                self.config.seat,
                root_seat
            );
        }

        root_moves.as_mut_slice().shuffle(&mut self.rng);

        let mut ctx = SearchContext {
            root_seat,
            clock: &clock,
            stats: &mut self.stats,
        };
        let completed = ctx.iterative_deepening(state, root_moves.as_slice(), self.config.max_depth);

        let result = match completed {
            Some((mv, score, depth)) => SearchResult {
                best_move: Some(mv),
                score: Some(score),
                depth,
                nodes: self.stats.nodes,
                elapsed: clock.elapsed(),
            },
            None => {
                log::debug!("no depth completed, falling back to {fallback}");
                SearchResult {
                    best_move: Some(fallback),
                    score: None,
                    depth: 0,
                    nodes: self.stats.nodes,
                    elapsed: clock.elapsed(),
                }
            }
        };

        log::info!(
            "bestmove {} depth {} nodes {} time {}ms",
            move_or_none(result.best_move),
            result.depth,
            result.nodes,
            result.elapsed.as_millis()
        );
        result
    }
}

fn move_or_none(mv: Option<Move>) -> String {
    mv.map_or_else(|| "none".to_string(), |m| m.to_string())
}

/// One-shot search with a fresh bot.
#[must_use]
pub fn find_best_move(state: &GameState, config: SearchConfig) -> Option<Move> {
    Bot::new(config).choose_move(state)
}
