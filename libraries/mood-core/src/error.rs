//! Core error types for Mood Player

use thiserror::Error;

/// Result type alias using `MoodError`
pub type Result<T> = std::result::Result<T, MoodError>;

/// Core error type for Mood Player
///
/// No variant here is fatal: every failure degrades to a safe idle-equivalent
/// state and nothing is retried automatically.
#[derive(Error, Debug)]
pub enum MoodError {
    /// A dropped input whose declared type is not an audio category.
    /// Callers treat this as a silent no-op; prior state stays untouched.
    #[error("Not an audio input: {mime_type}")]
    InvalidInputType {
        /// The declared MIME type of the rejected input
        mime_type: String,
    },

    /// The media handle failed to start playback (unsupported format, etc.)
    #[error("Playback unavailable: {0}")]
    PlaybackUnavailable(String),
}

impl MoodError {
    /// Create an invalid input type error from a declared MIME type
    pub fn invalid_input_type(mime_type: impl Into<String>) -> Self {
        Self::InvalidInputType {
            mime_type: mime_type.into(),
        }
    }

    /// Create a playback unavailable error
    pub fn playback_unavailable(msg: impl Into<String>) -> Self {
        Self::PlaybackUnavailable(msg.into())
    }
}
