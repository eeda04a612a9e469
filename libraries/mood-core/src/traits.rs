/// Boundary traits for the host media primitive
use crate::error::Result;
use crate::types::AudioSource;
use std::time::Duration;

/// Playable handle bound to one loaded source
///
/// Abstracts the host media-playback primitive (an HTML audio element, a
/// platform decoder, a test double). The playback controller drives a handle
/// it does not own; the media manager owns it and drops it on supersession.
pub trait MediaHandle: Send {
    /// Whether the handle has buffered enough to begin playback
    ///
    /// When this returns false, a play request is suspended until the host
    /// delivers [`HandleEvent::ReadyToPlay`].
    fn ready(&self) -> bool;

    /// Begin or resume playback
    ///
    /// # Errors
    /// Returns an error if the host cannot start playback (unsupported
    /// format, device failure). Callers must not leave a stale playing flag.
    fn start(&mut self) -> Result<()>;

    /// Pause playback
    ///
    /// Always succeeds; pausing an already-paused handle is harmless.
    fn pause(&mut self);

    /// Set the muted flag
    fn set_muted(&mut self, muted: bool);

    /// Get the muted flag
    fn is_muted(&self) -> bool;

    /// Current playback position from the start of the clip
    fn position(&self) -> Duration;

    /// Total clip duration
    ///
    /// Returns `None` while the host has not determined it yet.
    fn duration(&self) -> Option<Duration>;
}

/// Factory for playable handles
///
/// Implementers bind a loaded source to a host media primitive.
pub trait MediaBackend: Send {
    /// Open a playable handle for the given source
    ///
    /// # Errors
    /// Returns an error if the host cannot create a playable resource.
    fn open(&mut self, source: &AudioSource) -> Result<Box<dyn MediaHandle>>;
}

/// Notifications delivered by the host media primitive
///
/// The host forwards these to the playback controller; they are the only way
/// playback progress and completion are observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEvent {
    /// The handle buffered enough to begin playback
    ReadyToPlay,

    /// Playback position advanced; position/duration should be resampled
    TimeAdvanced,

    /// Playback reached the end of the clip
    Ended,
}
