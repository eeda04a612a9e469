//! Mood Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Mood Player.
//!
//! This crate provides the foundational building blocks shared by the media,
//! playback, and inference crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `AudioSource`, `SourceId`, `Emotion`, `EmotionResult`
//! - **Boundary Traits**: `MediaHandle`, `MediaBackend` (host media primitive)
//! - **Error Handling**: Unified `MoodError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mood_core::types::{AudioSource, Emotion, SourceId};
//!
//! let source = AudioSource::new(SourceId::new(1), "clip_happy_voice.wav", 44_100, "audio/wav");
//!
//! assert_eq!(source.name, "clip_happy_voice.wav");
//! assert_eq!(Emotion::Happy.as_str(), "happy");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MoodError, Result};
pub use traits::{HandleEvent, MediaBackend, MediaHandle};

// Export all types
pub use types::{AudioSource, Emotion, EmotionResult, SourceId};
