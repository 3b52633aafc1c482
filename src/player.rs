use crate::{
    board::Board,
    common::{Coord, ShotResult},
};

/// Interface implemented by the human and computer sides.
pub trait Player {
    /// Place the ships listed in `rules`, in order, onto `board`.
    fn place_ships(&mut self, board: &mut Board, rules: &[usize]) -> anyhow::Result<()>;

    /// Choose the next cell to fire at on `enemy`. The returned cell must be
    /// in bounds and not tried yet.
    fn select_target(&mut self, own: &Board, enemy: &Board) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _result: ShotResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coord, _result: ShotResult) {}
}
