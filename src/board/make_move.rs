use std::iter;

use super::{GameState, MoveError, Move, SeedColor, Seat, Targeting, NUM_HOLES};

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Hole that received the last sown seed
    pub last_hole: usize,
    /// Number of seeds sown
    pub sown: u32,
    /// Seeds moved into the mover's score by the capture chain
    pub captured: u32,
}

impl GameState {
    /// Play a move for the side to move.
    ///
    /// Picks up the selected seeds, sows them one by one around the ring,
    /// resolves the capture chain backwards from the last sown hole, then
    /// passes the turn. On error the state is left untouched.
    ///
    /// [`GameState::is_legal`] does not predict `MoveError::SeedOverflow`,
    /// which only a hand-built board with a full color counter can raise.
    ///
    /// This never refuses a move because the game is already decided; callers
    /// check [`GameState::status`] themselves.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.validate_move(mv)?;

        let source = mv.hole();
        let selector = mv.selector();
        let base_color = selector.base_color();

        let before = self.holes[source];
        let transparent = if selector.is_transparent() {
            before.transparent
        } else {
            0
        };
        let base = before.count(base_color);
        if transparent == 0 && base == 0 {
            return Err(MoveError::NothingToSow { hole: source });
        }

        // Sow on a copy of the board so an overflow leaves the state untouched.
        let mut holes = self.holes;
        let hole = &mut holes[source];
        if selector.is_transparent() {
            hole.take(SeedColor::Transparent);
        }
        hole.take(base_color);

        let mover = self.side_to_move;
        let targeting = selector.targeting();

        // Transparent seeds are always sown before the colored ones.
        let seeds = iter::repeat(SeedColor::Transparent)
            .take(usize::from(transparent))
            .chain(iter::repeat(base_color).take(usize::from(base)));

        let mut cursor = source;
        for color in seeds {
            cursor = next_target(cursor, source, mover, targeting);
            holes[cursor]
                .add(color)
                .ok_or(MoveError::SeedOverflow { hole: cursor })?;
        }
        self.holes = holes;

        let captured = self.capture_chain(cursor, mover);

        self.side_to_move = mover.opponent();
        self.moves_played += 1;

        Ok(MoveOutcome {
            last_hole: cursor,
            sown: u32::from(transparent) + u32::from(base),
            captured,
        })
    }

    /// Snapshot the state and play `mv` on the copy.
    pub fn with_move(&self, mv: Move) -> Result<GameState, MoveError> {
        let mut next = self.snapshot();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Walk backwards from `start`, emptying every hole holding 2 or 3 seeds
    /// into `mover`'s score, until a hole breaks the chain.
    fn capture_chain(&mut self, start: usize, mover: Seat) -> u32 {
        let mut index = start;
        let mut captured = 0;
        for _ in 0..NUM_HOLES {
            let total = self.holes[index].total();
            if !(2..=3).contains(&total) {
                break;
            }
            captured += self.holes[index].clear();
            index = (index + NUM_HOLES - 1) % NUM_HOLES;
        }
        self.scores[mover.index()] += captured;
        captured
    }
}

/// Next hole clockwise from `from` that may receive a seed.
#[inline]
fn next_target(from: usize, source: usize, mover: Seat, targeting: Targeting) -> usize {
    let mut index = from;
    loop {
        index = (index + 1) % NUM_HOLES;
        if index == source {
            continue;
        }
        if targeting == Targeting::OpponentHoles && mover.owns(index) {
            continue;
        }
        return index;
    }
}
