use super::{SearchAborted, SearchContext};
use crate::board::{GameState, Move};

impl SearchContext<'_> {
    /// Iterative deepening from depth 1 to `max_depth`.
    ///
    /// Returns the best move, its score and the depth of the last iteration
    /// that finished before the deadline. An aborted iteration contributes
    /// nothing.
    pub(super) fn iterative_deepening(
        &mut self,
        state: &GameState,
        root_moves: &[Move],
        max_depth: u32,
    ) -> Option<(Move, i32, u32)> {
        let mut completed = None;

        for depth in 1..=max_depth {
            if self.clock.expired() {
                break;
            }

            let iter_start_nodes = self.stats.nodes;
            match self.search_root(state, root_moves, depth) {
                Ok(Some((mv, score))) => {
                    completed = Some((mv, score, depth));
                    self.stats.completed_depth = depth;
                    log::debug!(
                        "info depth {} score {} nodes {} time {}ms pv {}",
                        depth,
                        score,
                        self.stats.nodes - iter_start_nodes,
                        self.clock.elapsed().as_millis(),
                        mv
                    );
                }
                Ok(None) => break,
                Err(SearchAborted) => {
                    log::debug!(
                        "depth {} aborted after {}ms, keeping depth {}",
                        depth,
                        self.clock.elapsed().as_millis(),
                        self.stats.completed_depth
                    );
                    break;
                }
            }
        }

        completed
    }
}
