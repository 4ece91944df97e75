use super::search::constants::{
    DECIDED_SCORE, LOW_MOBILITY_PENALTY, LOW_MOBILITY_THRESHOLD, MOBILITY_COLORED,
    MOBILITY_TRANSPARENT, MOBILITY_WEIGHT, SCORE_WEIGHT, SEED_CONTROL_DIVISOR,
    VULNERABLE_HOLE_BONUS, WIN_SCORE,
};
use super::{GameState, Seat};

impl GameState {
    /// Static evaluation from `seat`'s point of view (positive is good for `seat`).
    #[must_use]
    pub fn evaluate(&self, seat: Seat) -> i32 {
        let own_score = self.score(seat);
        let opp_score = self.score(seat.opponent());

        if own_score > DECIDED_SCORE {
            return WIN_SCORE;
        }
        if opp_score > DECIDED_SCORE {
            return -WIN_SCORE;
        }

        let mut own_seeds = 0i32;
        let mut mobility = 0i32;
        for index in seat.holes() {
            let hole = self.holes[index];
            own_seeds += hole.total() as i32;
            if hole.red > 0 {
                mobility += MOBILITY_COLORED;
            }
            if hole.blue > 0 {
                mobility += MOBILITY_COLORED;
            }
            if hole.transparent > 0 {
                mobility += MOBILITY_TRANSPARENT;
            }
        }

        let mut opp_seeds = 0i32;
        let mut capture_potential = 0i32;
        for index in seat.opponent().holes() {
            let total = self.holes[index].total();
            opp_seeds += total as i32;
            if total == 1 || total == 2 {
                capture_potential += VULNERABLE_HOLE_BONUS;
            }
        }

        let mut mobility_bonus = mobility * MOBILITY_WEIGHT;
        if mobility <= LOW_MOBILITY_THRESHOLD {
            mobility_bonus -= LOW_MOBILITY_PENALTY;
        }

        let seed_control = (own_seeds - opp_seeds).div_euclid(SEED_CONTROL_DIVISOR);

        // Scores are bounded by the 96 seeds in play, the casts cannot wrap.
        (own_score as i32 - opp_score as i32) * SCORE_WEIGHT
            + capture_potential
            + mobility_bonus
            + seed_control
    }
}
