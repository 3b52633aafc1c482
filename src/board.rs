//! Game board: the grid of cell states and the fleet still afloat on it.

use core::fmt;

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::common::{Cell, Coord, PlacementError, ShotResult, TargetError};
use crate::ship::{Orientation, Ship};

/// Random (orientation, anchor) trials per ship before auto placement gives
/// up and starts over on an empty board.
pub const PLACEMENT_ATTEMPTS: usize = 20;

/// Auto placement ran out of trials for one ship.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error(
    "no room left for a ship of length {length} after {attempts} attempts",
    attempts = PLACEMENT_ATTEMPTS
)]
struct PlacementDeadlock {
    length: usize,
}

/// An N×N board with its live ships.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    fleet: Vec<Ship>,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: vec![Cell::Empty; size * size],
            fleet: Vec::new(),
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return every cell to open water and drop all ships.
    pub fn reset(&mut self) {
        self.grid.iter_mut().for_each(|c| *c = Cell::Empty);
        self.fleet.clear();
    }

    /// Ships still afloat, in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Number of ships still afloat.
    pub fn fleet_len(&self) -> usize {
        self.fleet.len()
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// State of the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.grid[row * self.size + col])
        } else {
            None
        }
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a zero-sized board.
        self.grid.chunks(self.size.max(1))
    }

    /// Whether `(row, col)` already holds a hit or a miss.
    pub fn is_tried(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map_or(false, Cell::is_tried)
    }

    /// Number of cells that have not been shot at or flooded yet.
    pub fn untried_count(&self) -> usize {
        self.grid.iter().filter(|c| !c.is_tried()).count()
    }

    fn set(&mut self, (row, col): Coord, cell: Cell) {
        self.grid[row * self.size + col] = cell;
    }

    /// In-bounds cells of `ship` and its surrounding ring.
    fn ring_cells(&self, ship: &Ship) -> impl Iterator<Item = Coord> {
        let (rows, cols) = ship.ring_bounds(self.size);
        let size = self.size;
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .filter(move |&(r, c)| r < size && c < size)
    }

    /// Check `ship` against the grid bounds and the separation rule.
    pub fn check_placement(&self, ship: &Ship) -> Result<(), PlacementError> {
        if ship
            .occupied_cells()
            .iter()
            .any(|&(r, c)| !self.in_bounds(r, c))
        {
            return Err(PlacementError::OutOfBounds);
        }
        if self
            .ring_cells(ship)
            .any(|(r, c)| self.cell(r, c) == Some(Cell::Occupied))
        {
            return Err(PlacementError::TooClose);
        }
        Ok(())
    }

    /// `true` when `ship` fits on the grid without touching another ship.
    pub fn can_place(&self, ship: &Ship) -> bool {
        self.check_placement(ship).is_ok()
    }

    /// Put `ship` on the board. Fails without touching the board when
    /// [`Board::can_place`] would have said no.
    pub fn place(&mut self, ship: Ship) -> Result<(), PlacementError> {
        self.check_placement(&ship)?;
        for &cell in ship.occupied_cells() {
            self.set(cell, Cell::Occupied);
        }
        trace!("placed {:?}", ship);
        self.fleet.push(ship);
        Ok(())
    }

    /// Randomly place every ship in `rules` that is not on the board yet.
    ///
    /// Ships already placed are taken to be the first `fleet_len()` entries of
    /// `rules`. Each remaining ship gets [`PLACEMENT_ATTEMPTS`] random trials;
    /// when they run out the board is cleared and placement starts again from
    /// the first rule. This only terminates if the fleet can actually fit.
    pub fn auto_place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R, rules: &[usize]) {
        let mut restarts = 0usize;
        while let Err(deadlock) = self.try_place_remaining(rng, rules) {
            restarts += 1;
            debug!("{}; clearing board (restart {})", deadlock, restarts);
            self.reset();
        }
        debug!(
            "auto placed {} ships after {} restart(s)",
            self.fleet.len(),
            restarts
        );
    }

    fn try_place_remaining<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        rules: &[usize],
    ) -> Result<(), PlacementDeadlock> {
        for &length in rules.iter().skip(self.fleet.len()) {
            let placed = (0..PLACEMENT_ATTEMPTS).any(|_| {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let anchor = (
                    rng.random_range(0..self.size),
                    rng.random_range(0..self.size),
                );
                self.place(Ship::new(length, orientation, anchor)).is_ok()
            });
            if !placed {
                return Err(PlacementDeadlock { length });
            }
        }
        Ok(())
    }

    /// Undo the most recent [`Board::place`]. Only valid before any shot.
    fn unplace_last(&mut self) {
        if let Some(ship) = self.fleet.pop() {
            for &cell in ship.occupied_cells() {
                self.set(cell, Cell::Empty);
            }
        }
    }

    /// Whether every ship in `rules` can be laid out on an empty
    /// `size`×`size` board at once.
    ///
    /// Exhaustive backtracking over (orientation, anchor), longest ships
    /// first. Ships of equal length only try candidates after the one taken
    /// by their predecessor, so interchangeable layouts are visited once.
    pub fn fleet_fits(size: usize, rules: &[usize]) -> bool {
        let mut lengths = rules.to_vec();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        let mut board = Board::new(size);
        let fits = board.fit_from(&lengths, 0);
        trace!("fleet {:?} fits on {}x{}: {}", rules, size, size, fits);
        fits
    }

    fn fit_from(&mut self, lengths: &[usize], first_candidate: usize) -> bool {
        let Some((&length, rest)) = lengths.split_first() else {
            return true;
        };
        let orientations: &[Orientation] = if length == 1 {
            &[Orientation::Horizontal]
        } else {
            &[Orientation::Horizontal, Orientation::Vertical]
        };
        let cells = self.size * self.size;
        for candidate in first_candidate..orientations.len() * cells {
            let orientation = orientations[candidate / cells];
            let anchor = ((candidate % cells) / self.size, candidate % self.size);
            if self.place(Ship::new(length, orientation, anchor)).is_err() {
                continue;
            }
            let next_first = match rest.first() {
                Some(&next) if next == length => candidate + 1,
                _ => 0,
            };
            if self.fit_from(rest, next_first) {
                return true;
            }
            self.unplace_last();
        }
        false
    }

    /// Check that `(row, col)` can be shot at.
    pub fn check_target(&self, row: usize, col: usize) -> Result<(), TargetError> {
        match self.cell(row, col) {
            None => Err(TargetError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
            Some(cell) if cell.is_tried() => Err(TargetError::AlreadyTargeted { row, col }),
            Some(_) => Ok(()),
        }
    }

    /// Fire at `(row, col)`.
    ///
    /// Sinking a ship floods its still-empty ring with misses, since no other
    /// ship may sit there, and removes it from the fleet. Out-of-grid or
    /// repeated shots are rejected and leave the board unchanged.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, TargetError> {
        self.check_target(row, col)?;
        if self.cell(row, col) != Some(Cell::Occupied) {
            self.set((row, col), Cell::Miss);
            return Ok(ShotResult::Miss);
        }

        self.set((row, col), Cell::Hit);
        let Some(idx) = self.fleet.iter().position(|s| s.contains(row, col)) else {
            // Occupied cells always belong to a fleet ship.
            return Ok(ShotResult::Hit);
        };
        let sunk = self.fleet[idx]
            .occupied_cells()
            .iter()
            .all(|&(r, c)| self.cell(r, c) == Some(Cell::Hit));
        if !sunk {
            return Ok(ShotResult::Hit);
        }

        let ship = self.fleet.remove(idx);
        let flood: Vec<Coord> = self
            .ring_cells(&ship)
            .filter(|&(r, c)| self.cell(r, c) == Some(Cell::Empty))
            .collect();
        for &cell in &flood {
            self.set(cell, Cell::Miss);
        }
        debug!(
            "sunk {:?}, flooded {} ring cell(s), {} ship(s) left",
            ship,
            flood.len(),
            self.fleet.len()
        );
        Ok(ShotResult::Sunk)
    }

    /// `true` once every ship has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, fleet: {:?}", self.size, self.fleet)?;
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|c| match c {
                    Cell::Empty => '.',
                    Cell::Occupied => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                })
                .collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
