//! Error types for the game-state model.

use thiserror::Error;

use crate::components::{DroidId, StructureId, StructureStatsId};

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for game-state operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// Player index outside `0..MAX_PLAYERS`.
    #[error("Invalid player: {0}")]
    InvalidPlayer(u8),

    /// Invalid droid identifier.
    #[error("Droid not found: {0}")]
    UnknownDroid(DroidId),

    /// Invalid structure identifier.
    #[error("Structure not found: {0}")]
    UnknownStructure(StructureId),

    /// Invalid structure stats index.
    #[error("Structure stats not found: {0}")]
    UnknownStructureStats(StructureStatsId),

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Invalid game state.
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
