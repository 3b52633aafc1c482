//! Axis labels and coordinate parsing for the text interface.
//!
//! Rows and columns are both labelled with letters, `A` being index 0. A
//! coordinate is written row first, then column, with any separator that is
//! not a letter (or none at all): `"b c"`, `"B-C"` and `"bc"` are all row 1,
//! column 2.

use crate::common::{Coord, ParseError};
use crate::ship::Orientation;

/// Largest board the single-letter labels can address.
pub const MAX_AXIS_LEN: usize = 26;

/// Label for a row or column index. Indices past `Z` have no label and
/// render as `?`.
pub fn axis_label(index: usize) -> char {
    if index < MAX_AXIS_LEN {
        (b'A' + index as u8) as char
    } else {
        '?'
    }
}

/// Format a coordinate the way a player types it, e.g. `"B C"`.
pub fn format_coord((row, col): Coord) -> String {
    format!("{} {}", axis_label(row), axis_label(col))
}

/// Pull exactly two axis labels out of `text`. Characters other than ASCII
/// letters are ignored. Bounds are not checked here.
pub fn parse_coordinate(text: &str) -> Result<Coord, ParseError> {
    let labels: Vec<usize> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| (ch.to_ascii_uppercase() as u8 - b'A') as usize)
        .collect();
    match labels.as_slice() {
        [] => Err(ParseError::Empty),
        &[row, col] => Ok((row, col)),
        other => Err(ParseError::WrongLabelCount(other.len())),
    }
}

/// Parse `h`/`v` (or the full words), case-insensitive.
pub fn parse_orientation(text: &str) -> Result<Orientation, ParseError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        _ => Err(ParseError::BadOrientation(text.trim().to_string())),
    }
}
