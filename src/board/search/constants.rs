//! Search constants and evaluation weights.
//!
//! Relative magnitudes matter more than the exact values: a decided game
//! dominates the score difference, which in turn dominates the positional
//! terms.

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default iterative deepening cap
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default per-move budget, under the referee's 2 second limit
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1900;

/// Score assigned to a position where one side already has more than
/// `DECIDED_SCORE` seeds
pub const WIN_SCORE: i32 = 10_000;

/// Infinity for the alpha-beta window
pub const INFINITY: i32 = WIN_SCORE + 1;

// ============================================================================
// EVALUATION WEIGHTS
// ============================================================================

/// A score above this is treated as a decided game by the evaluator
pub const DECIDED_SCORE: u32 = 48;

/// Weight of the score difference
pub const SCORE_WEIGHT: i32 = 10;

/// Bonus per opponent hole holding 1 or 2 seeds (one sowing away from capture)
pub const VULNERABLE_HOLE_BONUS: i32 = 3;

/// Mobility units for a playable Red or Blue category
pub const MOBILITY_COLORED: i32 = 1;

/// Mobility units for a playable Transparent category (two moves)
pub const MOBILITY_TRANSPARENT: i32 = 2;

/// Multiplier applied to mobility units
pub const MOBILITY_WEIGHT: i32 = 2;

/// Mobility at or below this is penalized
pub const LOW_MOBILITY_THRESHOLD: i32 = 2;

/// Penalty for low mobility (risk of running out of moves)
pub const LOW_MOBILITY_PENALTY: i32 = 10;

/// Divisor for the seed-count difference (floor division)
pub const SEED_CONTROL_DIVISOR: i32 = 2;
