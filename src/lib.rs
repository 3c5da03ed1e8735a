//! Wireworld - a cellular automaton engine for signal-carrying circuits.
//!
//! Cells are empty, conductor, electron head or electron tail. Each
//! generation heads become tails, tails become conductors, and a conductor
//! becomes a head when one or two of its eight neighbors are heads.
//!
//! The engine is driven either through [`Automaton`] or, from a host UI or
//! renderer, through the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Anchor, Cell, Grid, Pattern, Preset, StepOutcome};
pub use config::{ConfigError, EditPolicy, EngineConfig};
pub use error::{EngineError, Result};
pub use state::Automaton;

#[cfg(test)]
mod tests;
