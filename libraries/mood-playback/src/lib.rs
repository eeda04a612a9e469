//! Mood Player - Playback Control
//!
//! Platform-agnostic playback control for Mood Player.
//!
//! This crate provides:
//! - A playback state machine (Idle, Loading, Playing, Paused, Ended)
//! - Progress reporting as a clamped percentage
//! - Mute control independent of playback phase
//! - Suspended play requests that resume on the host's ready signal
//! - A pending-event queue any observer can drain
//!
//! # Architecture
//!
//! `mood-playback` never owns the playable handle. The media manager owns it;
//! the controller borrows `&mut dyn MediaHandle` per call and only tracks
//! which source generation it is attached to. Host notifications (time
//! advance, ready, ended) are fed in through [`PlayerController::handle_event`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mood_core::{HandleEvent, MediaHandle};
//! use mood_playback::PlayerController;
//!
//! # fn demo(handle: &mut dyn MediaHandle, source: &mood_core::AudioSource) {
//! let mut controller = PlayerController::new();
//! controller.attach(source, handle);
//!
//! // Suspends until ReadyToPlay if the handle is still buffering
//! controller.play(handle).ok();
//!
//! controller.handle_event(HandleEvent::TimeAdvanced, handle);
//! println!("{:?}", controller.status());
//! # }
//! ```

mod controller;
mod error;
mod events;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use types::{PlaybackPhase, PlaybackStatus};
