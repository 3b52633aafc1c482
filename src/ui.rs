//! Text rendering of the two boards side by side.

use std::fmt::Write as _;

use crate::{board::Board, config::Symbols, coord::axis_label};

const TITLE: &str = "Sea Battle";
const HINT: &str = "shot format: \"row column\", e.g. B C";
const PLACEHOLDER: &str = "(not available yet)";

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the player's board on the left and the computer's on the right.
#[derive(Debug, Clone)]
pub struct Renderer {
    symbols: Symbols,
}

impl Renderer {
    pub fn new(symbols: Symbols) -> Self {
        Self { symbols }
    }

    /// Render `left` in full and `right` with ships hidden unless
    /// `reveal_right` is set. A missing `right` board is drawn as a
    /// placeholder, which is what manual placement shows.
    pub fn render(&self, left: &Board, right: Option<&Board>, reveal_right: bool) -> String {
        let width = left.size() * 8;
        let half = width / 2;
        let rule = "-".repeat(width);
        let mut out = String::new();

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{:^width$}", TITLE);
        let _ = writeln!(out);
        let _ = writeln!(out, "{:^width$}", HINT);
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out);
        let _ = writeln!(out, "{:^half$}{:^half$}", "Player", "Computer");
        let right_ships = match right {
            Some(board) => format!("Ships: {}", board.fleet_len()),
            None => "Ships: -".to_string(),
        };
        let _ = writeln!(
            out,
            "{:^half$}{:^half$}",
            format!("Ships: {}", left.fleet_len()),
            right_ships
        );
        let _ = writeln!(out);

        let left_lines = self.board_lines(left, true);
        let right_lines = match right {
            Some(board) => self.board_lines(board, reveal_right),
            None => {
                let mut lines = vec![String::new(); left_lines.len()];
                if let Some(first) = lines.first_mut() {
                    *first = PLACEHOLDER.to_string();
                }
                lines
            }
        };
        for (l, r) in left_lines.iter().zip(right_lines.iter()) {
            let _ = writeln!(out, "{:^half$}{:^half$}", l, r);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule);
        out
    }

    /// Header plus one line per row, e.g. `" |A|B|C"` and `"A|~|■|X"`.
    fn board_lines(&self, board: &Board, reveal: bool) -> Vec<String> {
        let labels: Vec<String> = (0..board.size())
            .map(|i| axis_label(i).to_string())
            .collect();
        let mut lines = vec![format!(" |{}", labels.join("|"))];
        for (r, row) in board.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&cell| {
                    let shown = if reveal { cell } else { cell.masked() };
                    self.symbols.for_cell(shown).to_string()
                })
                .collect();
            lines.push(format!("{}|{}", axis_label(r), cells.join("|")));
        }
        lines
    }
}
