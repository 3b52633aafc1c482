use anyhow::anyhow;
use rand::Rng;

use crate::{ai::RandomTargeting, board::Board, common::Coord, player::Player};

/// Computer player: random fleet placement and random targeting, driven by a
/// single injected generator.
pub struct AiPlayer<R> {
    targeting: RandomTargeting<R>,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            targeting: RandomTargeting::new(rng),
        }
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn place_ships(&mut self, board: &mut Board, rules: &[usize]) -> anyhow::Result<()> {
        board.auto_place_fleet(self.targeting.rng_mut(), rules);
        Ok(())
    }

    fn select_target(&mut self, _own: &Board, enemy: &Board) -> anyhow::Result<Coord> {
        self.targeting
            .select_target(enemy)
            .ok_or_else(|| anyhow!("no untried cells left to target"))
    }
}
