//! Reusable circuit patterns and the built-in presets.

use std::fmt;
use std::str::FromStr;

use super::cell::Cell;
use super::grid::Grid;
use super::text::parse_grid;

/// Where a stamped pattern is positioned relative to the target cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// The pattern's centre cell (`height / 2`, `width / 2`) lands on the target.
    #[default]
    Center,
    /// The pattern's top-left cell lands on the target.
    TopLeft,
}

impl Anchor {
    /// Decode an ABI code: 1 is `TopLeft`, anything else `Center`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Anchor::TopLeft,
            _ => Anchor::Center,
        }
    }
}

/// A small grid of cells to be stamped into a larger one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    grid: Grid,
}

impl Pattern {
    /// Parse pattern text using the circuit text rules. Blank text gives a
    /// 0x0 pattern.
    pub fn parse(text: &str) -> Self {
        Pattern {
            grid: parse_grid(text, 0).unwrap_or_default(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// How far up and left of the target the pattern's top-left cell sits.
    fn anchor_offset(&self, anchor: Anchor) -> (usize, usize) {
        match anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center => (self.height() / 2, self.width() / 2),
        }
    }
}

impl From<Grid> for Pattern {
    fn from(grid: Grid) -> Self {
        Pattern { grid }
    }
}

/// Write the non-empty cells of `pattern` into `grid`.
///
/// Empty pattern cells leave the target untouched, and cells landing outside
/// the grid are skipped. Returns the number of cells written.
pub fn stamp_pattern(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize, anchor: Anchor) -> usize {
    let (row_offset, col_offset) = pattern.anchor_offset(anchor);
    let mut written = 0;

    for pr in 0..pattern.height() {
        for pc in 0..pattern.width() {
            let cell = pattern.grid.cells()[pattern.grid.index_of(pr, pc)];
            if cell == Cell::Empty {
                continue;
            }

            // Targets above or left of the grid, or past usize::MAX, are skipped
            let target_row = row.checked_add(pr).and_then(|r| r.checked_sub(row_offset));
            let target_col = col.checked_add(pc).and_then(|c| c.checked_sub(col_offset));
            let (Some(target_row), Some(target_col)) = (target_row, target_col) else {
                continue;
            };

            if grid.set(target_row, target_col, cell).is_some() {
                written += 1;
            }
        }
    }

    written
}

/// Built-in circuits offered by the preset palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Diode,
    Transistor,
    Xor,
    Clock,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Diode, Preset::Transistor, Preset::Xor, Preset::Clock];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Diode => "diode",
            Preset::Transistor => "transistor",
            Preset::Xor => "xor",
            Preset::Clock => "clock",
        }
    }

    /// Circuit text for the preset.
    pub fn source(self) -> &'static str {
        match self {
            Preset::Diode => ".w.\nwww\n.w.",
            Preset::Transistor => "..w..\n.whw.\nw.w.w\n.whw.\n..w..",
            Preset::Xor => concat!(
                "www......\n",
                "...w.....\n",
                "..wwww...\n",
                "..w..wwww\n",
                "..wwww...\n",
                "...w.....\n",
                "www......",
            ),
            Preset::Clock => ".wwth.\nw....w\n.wwww.",
        }
    }

    pub fn pattern(self) -> Pattern {
        Pattern::parse(self.source())
    }

    /// Decode an ABI code (index into [`Preset::ALL`]).
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
