//! Ingestion boundary types and validation

use serde::{Deserialize, Serialize};

/// How a file reached the ingestion boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestMethod {
    /// Explicit file picker; the host UI already filtered to audio types
    Picker,

    /// Drag-and-drop; the declared MIME type must be validated here
    Drop,
}

/// A file offered for loading
///
/// Transient, session-only input; no disk persistence is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInput {
    /// Display name of the file
    pub name: String,

    /// Declared MIME type (e.g. `audio/mpeg`, `text/plain`)
    pub mime_type: String,

    /// Size in bytes
    pub byte_len: u64,

    /// How the file was offered
    pub method: IngestMethod,
}

impl FileInput {
    /// Create an input from the explicit file picker (pre-filtered by the host)
    pub fn picked(name: impl Into<String>, byte_len: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            byte_len,
            method: IngestMethod::Picker,
        }
    }

    /// Create an input from a drag-and-drop gesture
    pub fn dropped(name: impl Into<String>, byte_len: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            byte_len,
            method: IngestMethod::Drop,
        }
    }
}

/// Check whether a declared MIME type is an audio category
///
/// Dropped inputs are accepted only when this holds; the picker path trusts
/// the OS-level filter instead.
pub fn is_audio_mime(mime_type: &str) -> bool {
    mime_type.starts_with("audio/")
}
