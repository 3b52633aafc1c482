//! Sea Battle: a single-player Battleship variant against a random-shooting
//! computer, on a configurable square board where ships may not touch.

mod ai;
mod board;
mod common;
mod config;
pub mod coord;
mod game;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{axis_label, format_coord, parse_coordinate, parse_orientation};
pub use game::*;
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
pub use ui::Renderer;
