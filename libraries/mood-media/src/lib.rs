//! Mood Player - Media Resource Management
//!
//! Owns the lifecycle of the loaded clip and its playable handle.
//!
//! This crate provides:
//! - Ingestion validation (drag-and-drop inputs must be audio-typed)
//! - Scoped acquisition of the playable handle via a `MediaBackend`
//! - Deterministic release on supersession and teardown (no leak across loads)
//! - Generation tagging of every successful load
//!
//! # Architecture
//!
//! Exactly one source is active at a time and the manager owns it
//! exclusively. Consumers get clones of the source metadata and short-lived
//! `&mut dyn MediaHandle` borrows; nothing outside this crate keeps the
//! handle alive after the source is replaced.

mod ingest;
mod manager;

// Public exports
pub use ingest::{is_audio_mime, FileInput, IngestMethod};
pub use manager::MediaManager;
