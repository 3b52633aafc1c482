//! Ship footprints.

use core::fmt;
use core::ops::RangeInclusive;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Step from one ship cell to the next, as `(d_row, d_col)`.
    pub fn unit(self) -> Coord {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship's footprint: `length` cells running from `anchor` (its top-left
/// cell) along `orientation`.
///
/// Bounds and separation are not checked here; that is the board's job.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    anchor: Coord,
    cells: Vec<Coord>,
}

impl Ship {
    /// Build a ship at `anchor`, extending `length` cells along `orientation`.
    pub fn new(length: usize, orientation: Orientation, anchor: Coord) -> Self {
        let (dr, dc) = orientation.unit();
        let cells = (0..length)
            .map(|i| (anchor.0 + i * dr, anchor.1 + i * dc))
            .collect();
        Ship {
            length,
            orientation,
            anchor,
            cells,
        }
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of the ship.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn occupied_cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Whether the ship covers `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Last cell of the ship, or the anchor for a zero-length ship.
    fn far_end(&self) -> Coord {
        self.cells.last().copied().unwrap_or(self.anchor)
    }

    /// Rows and columns of the ship plus a one-cell ring, clipped to a
    /// `size`×`size` grid. Cells beyond the grid are simply dropped.
    pub fn ring_bounds(&self, size: usize) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
        let (r0, c0) = self.anchor;
        let (r1, c1) = self.far_end();
        let last = size.saturating_sub(1);
        (
            r0.saturating_sub(1)..=(r1 + 1).min(last),
            c0.saturating_sub(1)..=(c1 + 1).min(last),
        )
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, anchor: ({}, {}), orientation: {:?} }}",
            self.length, self.anchor.0, self.anchor.1, self.orientation,
        )
    }
}
