//! Core domain types for Mood Player

mod emotion;
mod source;

pub use emotion::{Emotion, EmotionResult};
pub use source::{AudioSource, SourceId};
