//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Playback phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// No source loaded, or source not started yet
    Idle,

    /// Source attached, buffering; a play request may be suspended here
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-clip
    Paused,

    /// Playback reached the end of the clip
    Ended,
}

/// Observable playback state
///
/// Mutated only by the controller, in response to commands or handle events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// Current playback phase
    pub phase: PlaybackPhase,

    /// Progress through the clip, clamped to [0, 100]
    ///
    /// Always 0 while Idle and immediately after Ended; 0 when the clip
    /// duration is still unknown.
    pub progress_percent: f32,

    /// Whether output is muted; orthogonal to phase and progress
    pub muted: bool,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            progress_percent: 0.0,
            muted: false,
        }
    }
}
