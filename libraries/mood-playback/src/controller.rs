//! Playback controller - the state machine over the active clip
//!
//! Drives a single playable handle through Idle → Loading → Playing ⇄ Paused
//! → Ended and reports progress as a clamped percentage.

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    types::{PlaybackPhase, PlaybackStatus},
};
use mood_core::{AudioSource, HandleEvent, MediaHandle, SourceId};
use std::time::Duration;

/// Playback state machine for one active source
///
/// The controller holds a non-owning view of the active source (its
/// generation tag only) and borrows the playable handle per call. A play
/// request made before the handle is ready is suspended, not failed: the
/// request completes when [`HandleEvent::ReadyToPlay`] arrives, and is
/// discarded if the source is replaced first.
pub struct PlayerController {
    // State
    status: PlaybackStatus,
    source: Option<SourceId>,

    // A play request waiting for the handle's ready signal.
    // Cleared on attach/detach/pause, so it can never outlive its source.
    pending_play: bool,

    // Event queue for observer synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    /// Create a new controller with nothing attached
    pub fn new() -> Self {
        Self {
            status: PlaybackStatus::default(),
            source: None,
            pending_play: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Attachment =====

    /// Attach to a freshly loaded source
    ///
    /// Resets phase to Idle and progress to 0, discards any pending play
    /// suspension from the previous source, and re-applies the sticky mute
    /// flag to the new handle.
    pub fn attach(&mut self, source: &AudioSource, handle: &mut dyn MediaHandle) {
        self.source = Some(source.id);
        self.pending_play = false;
        handle.set_muted(self.status.muted);
        self.set_progress(0.0);
        self.set_phase(PlaybackPhase::Idle);
        self.pending_events.push(PlayerEvent::SourceAttached {
            source_id: source.id,
            name: source.name.clone(),
        });
    }

    /// Detach from the current source (teardown)
    pub fn detach(&mut self) {
        self.source = None;
        self.pending_play = false;
        self.set_progress(0.0);
        self.set_phase(PlaybackPhase::Idle);
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// If the handle is not ready yet, the request is suspended: phase moves
    /// to Loading and the attempt resumes on the ready signal. Suspension
    /// never blocks other operations.
    pub fn play(&mut self, handle: &mut dyn MediaHandle) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSourceLoaded);
        }

        if handle.ready() {
            self.start_now(handle)
        } else {
            self.pending_play = true;
            self.set_phase(PlaybackPhase::Loading);
            Ok(())
        }
    }

    /// Pause playback
    ///
    /// Synchronous; always succeeds when a handle exists. Also cancels a
    /// suspended play request.
    pub fn pause(&mut self, handle: &mut dyn MediaHandle) {
        if self.source.is_none() {
            return;
        }

        self.pending_play = false;
        handle.pause();
        if matches!(
            self.status.phase,
            PlaybackPhase::Playing | PlaybackPhase::Loading
        ) {
            self.set_phase(PlaybackPhase::Paused);
        }
    }

    /// Toggle between playing and paused
    pub fn toggle_playback(&mut self, handle: &mut dyn MediaHandle) -> Result<()> {
        match self.status.phase {
            PlaybackPhase::Playing | PlaybackPhase::Loading => {
                self.pause(handle);
                Ok(())
            }
            _ => self.play(handle),
        }
    }

    /// Toggle the mute flag
    ///
    /// Independent of phase; never touches progress.
    pub fn toggle_mute(&mut self, handle: &mut dyn MediaHandle) {
        self.status.muted = !self.status.muted;
        handle.set_muted(self.status.muted);
        self.pending_events.push(PlayerEvent::MuteChanged {
            muted: self.status.muted,
        });
    }

    // ===== Handle Notifications =====

    /// Process a notification from the host media primitive
    pub fn handle_event(&mut self, event: HandleEvent, handle: &mut dyn MediaHandle) {
        match event {
            HandleEvent::ReadyToPlay => {
                if self.pending_play {
                    self.pending_play = false;
                    // Failure is reported through the event queue; the caller
                    // of play() already returned.
                    if let Err(e) = self.start_now(handle) {
                        tracing::warn!("suspended play attempt failed: {e}");
                    }
                }
            }
            HandleEvent::TimeAdvanced => {
                // After Ended the controller stops sampling until a new play
                // request or source; while Idle progress must stay 0.
                if matches!(
                    self.status.phase,
                    PlaybackPhase::Playing | PlaybackPhase::Paused | PlaybackPhase::Loading
                ) {
                    let percent = progress_percent(handle.position(), handle.duration());
                    self.set_progress(percent);
                }
            }
            HandleEvent::Ended => {
                self.pending_play = false;
                self.set_progress(0.0);
                self.set_phase(PlaybackPhase::Ended);
            }
        }
    }

    // ===== Accessors =====

    /// Get the current observable status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Get the current phase
    pub fn phase(&self) -> PlaybackPhase {
        self.status.phase
    }

    /// Get the current progress percentage
    pub fn progress_percent(&self) -> f32 {
        self.status.progress_percent
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.status.muted
    }

    /// Generation tag of the attached source, if any
    pub fn source(&self) -> Option<SourceId> {
        self.source
    }

    /// Whether a play request is suspended awaiting the ready signal
    pub fn is_play_pending(&self) -> bool {
        self.pending_play
    }

    // ===== Events =====

    /// Take all pending events (clears the queue)
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Start playback on a ready handle
    ///
    /// On failure the phase is forced back to Idle so no stale playing flag
    /// survives, and the failure is reported as an event.
    fn start_now(&mut self, handle: &mut dyn MediaHandle) -> Result<()> {
        match handle.start() {
            Ok(()) => {
                self.set_phase(PlaybackPhase::Playing);
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.pending_play = false;
                // Idle always reads as zero progress, even after a resume
                // failure mid-clip.
                self.set_progress(0.0);
                self.set_phase(PlaybackPhase::Idle);
                self.pending_events.push(PlayerEvent::Error {
                    message: message.clone(),
                });
                Err(PlaybackError::Unavailable(message))
            }
        }
    }

    fn set_phase(&mut self, phase: PlaybackPhase) {
        if self.status.phase != phase {
            self.status.phase = phase;
            self.pending_events.push(PlayerEvent::StateChanged { phase });
        }
    }

    fn set_progress(&mut self, percent: f32) {
        if (self.status.progress_percent - percent).abs() > f32::EPSILON {
            self.status.progress_percent = percent;
            self.pending_events
                .push(PlayerEvent::ProgressUpdated { percent });
        }
    }
}

/// Derive a clamped progress percentage from position and duration
///
/// Unknown or zero duration reads as 0 rather than NaN/infinity.
fn progress_percent(position: Duration, duration: Option<Duration>) -> f32 {
    match duration {
        Some(d) if !d.is_zero() => {
            let percent = position.as_secs_f32() / d.as_secs_f32() * 100.0;
            percent.clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}
