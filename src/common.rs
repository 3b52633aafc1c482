//! Common types for Sea Battle: cell states, shot results and the errors
//! surfaced to the input layers.

use thiserror::Error;

/// A `(row, col)` position on a board, zero based.
pub type Coord = (usize, usize);

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open water that has not been shot at.
    Empty,
    /// Part of a live ship that has not been shot at.
    Occupied,
    /// A ship segment that was shot.
    Hit,
    /// Open water that was shot at or flooded around a sunk ship.
    Miss,
}

impl Cell {
    /// `true` once the cell has been resolved by a shot or a ring flood.
    pub fn is_tried(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    /// The cell as the enemy sees it: ships are hidden as open water.
    pub fn masked(self) -> Cell {
        match self {
            Cell::Occupied => Cell::Empty,
            other => other,
        }
    }
}

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotResult {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// Shot landed on open water.
    Miss,
}

impl ShotResult {
    /// Hits and sinks let the shooter fire again.
    pub fn retains_turn(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Why a ship could not be placed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the ship lies outside the grid.
    #[error("ship does not fit on the board")]
    OutOfBounds,
    /// The ship or its buffer ring touches another ship.
    #[error("ship touches another ship")]
    TooClose,
}

/// Failure to read a coordinate out of free-form text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text holds no axis labels at all.
    #[error("no coordinates given")]
    Empty,
    /// The text holds a number of axis labels other than two.
    #[error("expected a row and a column letter, found {0} letter(s)")]
    WrongLabelCount(usize),
    /// Orientation is neither `h` nor `v`.
    #[error("orientation must be 'h' or 'v', got {0:?}")]
    BadOrientation(String),
}

/// Why a shot cannot be taken at the requested coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The coordinate text was malformed.
    #[error("invalid input format: {0}")]
    Malformed(#[from] ParseError),
    /// The coordinate lies outside the grid.
    #[error("no such coordinates: ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The cell already holds a hit or a miss.
    #[error("this cell was already targeted")]
    AlreadyTargeted { row: usize, col: usize },
}

/// Errors raised by the turn arbiter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A shot was requested after the match ended.
    #[error("match is already over")]
    Finished,
    /// The shot was rejected by the attacked board.
    #[error(transparent)]
    Target(#[from] TargetError),
}
