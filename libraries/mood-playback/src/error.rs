//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No source is currently attached
    #[error("No source loaded")]
    NoSourceLoaded,

    /// The handle failed to start playback (unsupported format, etc.)
    #[error("Playback unavailable: {0}")]
    Unavailable(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
