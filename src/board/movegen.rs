use super::{GameState, Move, MoveError, MoveList, Selector, NUM_HOLES};

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Holes are scanned in ascending index; within a hole the order is
    /// Red, Blue, Transparent-as-Red, Transparent-as-Blue.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for index in self.side_to_move.holes() {
            let hole = self.holes[index];
            // Holes are 0..16, so the cast cannot truncate.
            let idx = index as u8;
            if hole.red > 0 {
                moves.push(Move::new(idx, Selector::Red));
            }
            if hole.blue > 0 {
                moves.push(Move::new(idx, Selector::Blue));
            }
            if hole.transparent > 0 {
                moves.push(Move::new(idx, Selector::TransparentAsRed));
                moves.push(Move::new(idx, Selector::TransparentAsBlue));
            }
        }
        moves
    }

    /// True if the side to move has at least one legal move.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        self.side_to_move
            .holes()
            .any(|i| !self.holes[i].is_empty())
    }

    /// Check a move against the current position without playing it.
    pub fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        let hole = mv.hole();
        if hole >= NUM_HOLES {
            return Err(MoveError::HoleOutOfRange { hole });
        }
        if !self.side_to_move.owns(hole) {
            return Err(MoveError::NotYourHole {
                hole,
                seat: self.side_to_move,
            });
        }
        let selector = mv.selector();
        if self.holes[hole].count(selector.required_color()) == 0 {
            return Err(MoveError::EmptySelection { hole, selector });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }
}
