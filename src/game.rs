//! Turn arbiter: two boards, whose turn it is, and when the match ends.

use log::{debug, info};
use serde::Serialize;

use crate::{
    board::Board,
    common::{Coord, MatchError, ShotResult},
    player::Player,
};

/// One side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// The human player. Moves first.
    Player,
    /// The computer.
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// How a match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// The loser's whole fleet was sunk.
    FleetSunk,
    /// The shot limit ran out; the side due to move loses.
    TurnCap,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: EndReason,
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// 1-based number of the turn just played.
    pub turn: usize,
    pub shooter: Side,
    pub target: Coord,
    pub result: ShotResult,
}

/// A match between the player and the computer.
#[derive(Debug, Clone)]
pub struct Match {
    player_board: Board,
    opponent_board: Board,
    active: Side,
    turn_count: usize,
    turn_cap: usize,
}

impl Match {
    /// Start a match on two empty `size`×`size` boards.
    pub fn new(size: usize) -> Self {
        Self::from_boards(Board::new(size), Board::new(size))
    }

    /// Start a match on already prepared boards. Both must be the same size.
    pub fn from_boards(player_board: Board, opponent_board: Board) -> Self {
        debug_assert_eq!(player_board.size(), opponent_board.size());
        let size = player_board.size();
        Match {
            player_board,
            opponent_board,
            active: Side::Player,
            turn_count: 0,
            turn_cap: 2 * size * size,
        }
    }

    /// Replace the default `2 × size²` shot limit.
    ///
    /// Shots only ever land on untried cells, so a full-size cap cannot run
    /// out before a fleet is sunk; a smaller cap makes the limit reachable.
    pub fn with_turn_cap(mut self, cap: usize) -> Self {
        self.turn_cap = cap;
        self
    }

    /// Clear both boards and hand the first move back to the player.
    pub fn reset(&mut self) {
        self.player_board.reset();
        self.opponent_board.reset();
        self.active = Side::Player;
        self.turn_count = 0;
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Opponent => &self.opponent_board,
        }
    }

    /// Mutable board owned by `side`, for ship placement.
    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player_board,
            Side::Opponent => &mut self.opponent_board,
        }
    }

    /// Side due to shoot next.
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Turns played so far.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Total turns after which the match is called off, `2 × size²` unless
    /// overridden.
    pub fn turn_cap(&self) -> usize {
        self.turn_cap
    }

    /// The result, once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player_board.is_defeated() {
            Some(Outcome {
                winner: Side::Opponent,
                reason: EndReason::FleetSunk,
            })
        } else if self.opponent_board.is_defeated() {
            Some(Outcome {
                winner: Side::Player,
                reason: EndReason::FleetSunk,
            })
        } else if self.turn_count >= self.turn_cap {
            Some(Outcome {
                winner: self.active.other(),
                reason: EndReason::TurnCap,
            })
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The active side fires at `target` on the other side's board.
    ///
    /// A miss passes the turn; a hit or a sinking keeps it. Rejected shots
    /// do not count as a turn.
    pub fn fire(&mut self, target: Coord) -> Result<TurnReport, MatchError> {
        if self.is_over() {
            return Err(MatchError::Finished);
        }
        let shooter = self.active;
        let result = self
            .board_mut(shooter.other())
            .resolve_shot(target.0, target.1)?;
        self.turn_count += 1;
        if !result.retains_turn() {
            self.active = shooter.other();
        }
        debug!(
            "turn {}: {:?} fires at {:?} -> {:?}",
            self.turn_count, shooter, target, result
        );
        Ok(TurnReport {
            turn: self.turn_count,
            shooter,
            target,
            result,
        })
    }

    /// Ask the active side's player for a target, fire, and tell both players
    /// what happened.
    pub fn play_turn(
        &mut self,
        player: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> anyhow::Result<TurnReport> {
        let target = match self.active {
            Side::Player => player.select_target(&self.player_board, &self.opponent_board)?,
            Side::Opponent => opponent.select_target(&self.opponent_board, &self.player_board)?,
        };
        let report = self.fire(target)?;
        match report.shooter {
            Side::Player => {
                player.handle_shot_result(report.target, report.result);
                opponent.handle_opponent_shot(report.target, report.result);
            }
            Side::Opponent => {
                opponent.handle_shot_result(report.target, report.result);
                player.handle_opponent_shot(report.target, report.result);
            }
        }
        Ok(report)
    }

    /// Play turns until the match is decided.
    pub fn play_out(
        &mut self,
        player: &mut dyn Player,
        opponent: &mut dyn Player,
    ) -> anyhow::Result<Outcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                info!(
                    "match over after {} turns: {:?} wins ({:?})",
                    self.turn_count, outcome.winner, outcome.reason
                );
                return Ok(outcome);
            }
            self.play_turn(player, opponent)?;
        }
    }
}
