use super::constants::INFINITY;
use super::{SearchAborted, SearchContext};
use crate::board::{GameState, Move};

impl SearchContext<'_> {
    /// Search every root move to `depth` and return the best one with its score.
    ///
    /// `moves` are tried in the given order; on equal scores the earlier move wins.
    pub(super) fn search_root(
        &mut self,
        state: &GameState,
        moves: &[Move],
        depth: u32,
    ) -> Result<Option<(Move, i32)>, SearchAborted> {
        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for &mv in moves {
            self.clock.check()?;

            let child = match state.with_move(mv) {
                Ok(child) => child,
                Err(e) => {
                    log::warn!("skipping root move {mv}: {e}");
                    continue;
                }
            };

            let score = self.alphabeta(&child, depth.saturating_sub(1), alpha, INFINITY, false)?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        Ok(best)
    }

    /// Minimax with alpha-beta pruning. Scores are always from `root_seat`'s
    /// view; `maximizing` is true on plies where `root_seat` is to move.
    pub(super) fn alphabeta(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, SearchAborted> {
        self.stats.nodes += 1;
        self.clock.check()?;

        if depth == 0 || state.is_game_over() {
            return Ok(state.evaluate(self.root_seat));
        }

        // With no legal move the loop never runs: being blocked scores as the
        // worst outcome for the side to move.
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in state.generate_moves() {
            self.clock.check()?;

            let child = match state.with_move(mv) {
                Ok(child) => child,
                Err(e) => {
                    log::warn!("skipping move {mv}: {e}");
                    continue;
                }
            };

            let score = self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::search::{SearchClock, SearchStats};
    use crate::board::{GameStateBuilder, Hole, Seat, Selector};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn test_clock(cancelled: bool) -> SearchClock {
        SearchClock::start(None, Arc::new(AtomicBool::new(cancelled)))
    }

    fn context<'a>(clock: &'a SearchClock, stats: &'a mut SearchStats, seat: Seat) -> SearchContext<'a> {
        SearchContext {
            root_seat: seat,
            clock,
            stats,
        }
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let clock = test_clock(false);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let state = GameState::new();
        let score = ctx
            .alphabeta(&state, 0, -INFINITY, INFINITY, true)
            .expect("no deadline");
        assert_eq!(score, state.evaluate(Seat::First));
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_root_prefers_capture() {
        // Hole 0 Red drops its seed into hole 1, which then holds 3 and is
        // captured. The Transparent moves from hole 2 capture nothing.
        let state = GameStateBuilder::new()
            .hole(0, Hole::new(1, 0, 0))
            .hole(1, Hole::new(1, 1, 0))
            .hole(2, Hole::new(0, 0, 5))
            .hole(7, Hole::new(5, 5, 0))
            .build();
        let clock = test_clock(false);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let moves: Vec<Move> = state.generate_moves().into_iter().collect();
        let (best, _) = ctx
            .search_root(&state, &moves, 1)
            .expect("no deadline")
            .expect("moves available");
        assert_eq!(best, Move::new(0, Selector::Red));
    }

    #[test]
    fn test_stopped_clock_aborts() {
        let clock = test_clock(true);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let state = GameState::new();
        let moves: Vec<Move> = state.generate_moves().into_iter().collect();
        assert_eq!(ctx.search_root(&state, &moves, 3), Err(SearchAborted));
    }

    #[test]
    fn test_blocked_root_seat_is_worst_case() {
        // Seat::First to move with every even hole empty.
        let state = GameStateBuilder::new().hole(1, Hole::new(5, 5, 5)).build();
        let clock = test_clock(false);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let score = ctx
            .alphabeta(&state, 2, -INFINITY, INFINITY, true)
            .expect("no deadline");
        assert_eq!(score, -INFINITY);
    }

    #[test]
    fn test_blocked_opponent_is_best_case() {
        // Seat::Second to move with every odd hole empty, scored for Seat::First.
        let state = GameStateBuilder::new()
            .hole(0, Hole::new(5, 5, 5))
            .side_to_move(Seat::Second)
            .build();
        let clock = test_clock(false);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let score = ctx
            .alphabeta(&state, 2, -INFINITY, INFINITY, false)
            .expect("no deadline");
        assert_eq!(score, INFINITY);
    }

    #[test]
    fn test_root_prefers_blocking_opponent() {
        // 0R fills hole 1 to 2 seeds and captures it, leaving Seat::Second
        // without seeds while 10 stay on the board.
        let state = GameStateBuilder::new()
            .hole(0, Hole::new(1, 0, 0))
            .hole(1, Hole::new(1, 0, 0))
            .hole(2, Hole::new(5, 5, 0))
            .build();
        let clock = test_clock(false);
        let mut stats = SearchStats::default();
        let mut ctx = context(&clock, &mut stats, Seat::First);
        let moves: Vec<Move> = state.generate_moves().into_iter().collect();
        let (best, score) = ctx
            .search_root(&state, &moves, 2)
            .expect("no deadline")
            .expect("moves available");
        assert_eq!(best, Move::new(0, Selector::Red));
        assert_eq!(score, INFINITY);
    }
}
