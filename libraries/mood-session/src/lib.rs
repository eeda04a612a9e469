//! Mood Player - Session Facade
//!
//! Wires the media manager, playback controller, and inference pipeline into
//! one command surface for a presentation layer.
//!
//! Commands: `load_file`, `toggle_playback`, `toggle_mute`, `analyze`, plus
//! `handle_media_event` for forwarding host media notifications.
//!
//! Observable streams (`tokio::sync::watch`): the playback status, the
//! current emotion result (absent until an analysis lands), and the
//! analyzing flag.
//!
//! # Concurrency model
//!
//! One logical task queue; the only suspension points are the pipeline's
//! simulated latency and a play request waiting for the handle's ready
//! signal. Both are generation-guarded: a deferred outcome is discarded when
//! the active source changed while it was in flight, so no stale async result
//! ever mutates state belonging to a superseded source.

mod session;

// Public exports
pub use session::Session;
