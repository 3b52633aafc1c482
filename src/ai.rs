//! Opponent targeting: uniform random shots with memory of what was tried.

use log::trace;
use rand::Rng;

use crate::{board::Board, common::Coord};

/// Picks shot coordinates against a board whose ships it cannot see.
///
/// Only the hit/miss state of each cell is consulted. Prior hits do not bias
/// the choice; the ring flood after a sinking is the only thing that narrows
/// the search.
#[derive(Debug, Clone)]
pub struct RandomTargeting<R> {
    rng: R,
}

impl<R: Rng> RandomTargeting<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// The generator, shared with ship placement by the computer player.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Choose a cell of `board` that has not been shot at yet.
    ///
    /// Rejection samples the whole grid until an untried cell turns up.
    /// Returns `None` only if every cell is already tried.
    pub fn select_target(&mut self, board: &Board) -> Option<Coord> {
        if board.untried_count() == 0 {
            return None;
        }
        let size = board.size();
        let mut draws = 0usize;
        loop {
            draws += 1;
            let row = self.rng.random_range(0..size);
            let col = self.rng.random_range(0..size);
            if !board.is_tried(row, col) {
                trace!("targeting ({}, {}) after {} draw(s)", row, col, draws);
                return Some((row, col));
            }
        }
    }
}
