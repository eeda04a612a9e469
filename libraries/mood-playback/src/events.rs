//! Playback Events
//!
//! Event-based communication for observer synchronization during playback.
//! Events are emitted at key points:
//! - Phase changes (play/pause/ended)
//! - Source attachment (replacement of the active clip)
//! - Progress updates (on every time-advance notification)
//! - Mute toggles
//! - Playback failures

use crate::types::PlaybackPhase;
use mood_core::SourceId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
///
/// Drained via [`crate::PlayerController::take_events`]; any observer can
/// subscribe, not just one UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback phase changed
    StateChanged {
        /// The new playback phase
        phase: PlaybackPhase,
    },

    /// A new source was attached, replacing any previous one
    SourceAttached {
        /// Generation tag of the new source
        source_id: SourceId,
        /// Display name of the new source
        name: String,
    },

    /// Progress changed (emitted on time-advance notifications)
    ProgressUpdated {
        /// Progress through the clip, clamped to [0, 100]
        percent: f32,
    },

    /// Mute flag flipped
    MuteChanged {
        /// Whether output is now muted
        muted: bool,
    },

    /// Playback failed to start; phase was forced back to Idle
    Error {
        /// Error message
        message: String,
    },
}
