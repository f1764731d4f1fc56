//! Error types for the fallible edges of the game (save file, tuning file)

use thiserror::Error;

/// Save file errors. Never surfaced to the player; economy writes log and swallow them.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Reading or writing the save file failed
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Save record could not be encoded or decoded
    #[error("save record JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tuning file errors
#[derive(Debug, Error)]
pub enum TuningError {
    /// Reading the tuning file failed
    #[error("tuning file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning JSON did not parse
    #[error("tuning JSON invalid: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning values parsed but violate a simulation invariant
    #[error("invalid tuning: {0}")]
    Invalid(String),
}
