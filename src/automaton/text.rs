//! Plain-text circuit format.
//!
//! One character per cell, one line per row. Lines may end in `\n` or `\r\n`.
//! Blank lines are dropped, trailing whitespace is trimmed, and short rows are
//! padded on the right with `Empty`.

use super::cell::Cell;
use super::grid::Grid;

/// Parse circuit text into a grid with `padding` empty cells on every side.
///
/// Returns `None` when the text has no non-blank lines.
pub fn parse_grid(text: &str, padding: usize) -> Option<Grid> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return None;
    }

    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let height = lines.len();
    let mut grid = Grid::new(width + 2 * padding, height + 2 * padding);

    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            grid.set(r + padding, c + padding, Cell::from_char(ch));
        }
    }

    Some(grid)
}

/// Serialize a grid using the canonical characters `.`, `w`, `h`, `t`.
/// Rows are joined by `\n` with no trailing newline.
pub fn serialize(grid: &Grid) -> String {
    grid.to_string()
}
