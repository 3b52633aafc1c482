use thiserror::Error;

use crate::board::Board;
use crate::common::Cell;
use crate::coord::MAX_AXIS_LEN;

pub const BOARD_SIZE: usize = 6;
pub const SHIP_RULES: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Display characters for each cell state. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub empty: char,
    pub occupied: char,
    pub hit: char,
    pub miss: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            empty: '~',
            occupied: '■',
            hit: 'X',
            miss: '·',
        }
    }
}

impl Symbols {
    /// Read four characters in the order empty, occupied, hit, miss.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = text.chars().collect();
        match chars.as_slice() {
            &[empty, occupied, hit, miss] => {
                let symbols = Symbols {
                    empty,
                    occupied,
                    hit,
                    miss,
                };
                let mut sorted = chars.clone();
                sorted.sort_unstable();
                sorted.dedup();
                if sorted.len() != 4 {
                    return Err(ConfigError::DuplicateSymbols(text.to_string()));
                }
                Ok(symbols)
            }
            _ => Err(ConfigError::SymbolCount(chars.len())),
        }
    }

    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied => self.occupied,
            Cell::Hit => self.hit,
            Cell::Miss => self.miss,
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_AXIS_LEN)]
    BadBoardSize(usize),
    #[error("the fleet needs at least one ship")]
    EmptyFleet,
    #[error("ship lengths must be positive")]
    ZeroLengthShip,
    #[error("a ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    #[error("the fleet cannot fit on a {0}x{0} board with ships kept apart")]
    FleetTooLarge(usize),
    #[error("could not parse ship length {0:?}")]
    BadShipLength(String),
    #[error("expected 4 display symbols, got {0}")]
    SymbolCount(usize),
    #[error("display symbols must be distinct, got {0:?}")]
    DuplicateSymbols(String),
}

/// Board size, fleet composition and display symbols for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Ship lengths in placement order.
    pub ship_rules: Vec<usize>,
    pub symbols: Symbols,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            ship_rules: SHIP_RULES.to_vec(),
            symbols: Symbols::default(),
        }
    }
}

impl GameConfig {
    /// Reject configurations the game cannot be played with.
    ///
    /// Every ship plus the cells to its right and below claims
    /// `2 * (len + 1)` cells of an `(N + 1)`×`(N + 1)` grid, and those claims
    /// never overlap. Fleets passing that count are then laid out for real
    /// with [`Board::fleet_fits`], so auto placement always has a solution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size;
        if size == 0 || size > MAX_AXIS_LEN {
            return Err(ConfigError::BadBoardSize(size));
        }
        if self.ship_rules.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.ship_rules.contains(&0) {
            return Err(ConfigError::ZeroLengthShip);
        }
        if let Some(&length) = self.ship_rules.iter().find(|&&l| l > size) {
            return Err(ConfigError::ShipTooLong { length, size });
        }
        let claimed: usize = self.ship_rules.iter().map(|l| 2 * (l + 1)).sum();
        if claimed > (size + 1) * (size + 1) || !Board::fleet_fits(size, &self.ship_rules) {
            return Err(ConfigError::FleetTooLarge(size));
        }
        Ok(())
    }

    /// Safety cap on the total number of shots in a match.
    pub fn turn_cap(&self) -> usize {
        2 * self.board_size * self.board_size
    }
}

/// Parse a comma or whitespace separated list of ship lengths, e.g. `"3,2,2,1"`.
pub fn parse_ship_rules(text: &str) -> Result<Vec<usize>, ConfigError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| ConfigError::BadShipLength(s.to_string()))
        })
        .collect()
}
