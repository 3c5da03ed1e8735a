//! Core automaton logic and grid operations.
//!
//! This module contains the cell model, the grid, the Wireworld step rule,
//! the text codec and pattern stamping. The FFI layer in `ffi/` and
//! [`crate::Automaton`] call these functions.

pub mod cell;
pub mod grid;
pub mod pattern;
pub mod region;
pub mod stepping;
pub mod text;

pub use cell::Cell;
pub use grid::Grid;
pub use pattern::{stamp_pattern, Anchor, Pattern, Preset, UnknownPreset};
pub use region::extract_region;
pub use stepping::{next_generation, step_automaton, StepOutcome};
pub use text::{parse_grid, serialize};
