//! Mood Player - Emotion Inference
//!
//! Classifies the dominant emotional tone of a loaded clip.
//!
//! This crate provides:
//! - The pluggable [`Classifier`] capability (swap in a real acoustic model
//!   without touching the pipeline contract)
//! - [`NameHeuristicClassifier`], the file-name heuristic with random fallback
//! - [`InferencePipeline`], which adds the fixed minimum latency and stamps
//!   results with the source's generation tag
//!
//! # Example
//!
//! ```rust
//! use mood_core::{AudioSource, Emotion, SourceId};
//! use mood_inference::{InferencePipeline, PipelineConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let pipeline = InferencePipeline::new(PipelineConfig {
//!     min_latency: std::time::Duration::from_millis(1),
//! });
//!
//! let source = AudioSource::new(SourceId::new(1), "clip_happy_voice.wav", 1024, "audio/wav");
//! let result = pipeline.analyze(&source).await.unwrap();
//!
//! assert_eq!(result.primary, Emotion::Happy);
//! assert!(result.secondary.is_none());
//! # }
//! ```

mod classifier;
mod error;
mod pipeline;

// Public exports
pub use classifier::{Classification, Classifier, NameHeuristicClassifier};
pub use error::{AnalysisError, Result};
pub use pipeline::{InferencePipeline, PipelineConfig};
