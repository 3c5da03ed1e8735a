//! Error types for the file and configuration boundaries.
//!
//! The engine itself never fails: malformed circuit text is normalized, not
//! rejected. Only reading/writing files and building from config can error.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors surfaced by [`crate::Automaton`] operations that touch the outside world.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A circuit file could not be read. The automaton is left unchanged.
    #[error("failed to read circuit {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A circuit file could not be written.
    #[error("failed to write circuit {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
