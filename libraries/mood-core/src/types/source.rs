//! Loaded clip identity and metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generation tag for a loaded source
///
/// Monotonically assigned per successful load and never reused within a
/// manager's lifetime. Deferred async work (pending play attempts, in-flight
/// analysis) records the tag it was started for and is discarded when the
/// current tag no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(u64);

impl SourceId {
    /// Create a source ID from its raw generation value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw generation value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The currently loaded clip's identity and metadata
///
/// Exactly one is active at a time. The media manager owns the active source
/// and its playable handle; everything else works with clones of this
/// metadata and validates applicability against `id` before mutating state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSource {
    /// Generation tag assigned at load time
    pub id: SourceId,

    /// Unique identifier of the playable handle bound to this source
    pub handle_id: Uuid,

    /// Display name of the clip (file name as ingested)
    pub name: String,

    /// Size of the clip in bytes
    pub byte_len: u64,

    /// Declared MIME type (e.g. `audio/wav`)
    pub mime_type: String,
}

impl AudioSource {
    /// Create a new audio source with a fresh handle ID
    pub fn new(
        id: SourceId,
        name: impl Into<String>,
        byte_len: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            handle_id: Uuid::new_v4(),
            name: name.into(),
            byte_len,
            mime_type: mime_type.into(),
        }
    }
}
