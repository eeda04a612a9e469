//! Media manager - exclusive owner of the active source and its handle

use crate::ingest::{is_audio_mime, FileInput, IngestMethod};
use mood_core::{AudioSource, MediaBackend, MediaHandle, MoodError, Result, SourceId};

/// The active source together with its playable handle
struct ActiveSource {
    source: AudioSource,
    handle: Box<dyn MediaHandle>,
}

/// Exclusive owner of the loaded clip and its playable handle
///
/// At most one source is active at a time. Loading a new source releases the
/// previous handle exactly once before a new one is opened; dropping the
/// manager releases whatever is still held.
pub struct MediaManager {
    backend: Box<dyn MediaBackend>,
    active: Option<ActiveSource>,
    // Next generation tag; bumped on every successful load, never reused
    next_generation: u64,
}

impl MediaManager {
    /// Create a manager over the given host backend
    pub fn new(backend: Box<dyn MediaBackend>) -> Self {
        Self {
            backend,
            active: None,
            next_generation: 1,
        }
    }

    /// Load a file, replacing any active source
    ///
    /// Dropped inputs whose declared type is not `audio/*` are rejected with
    /// `MoodError::InvalidInputType` and leave the previous source untouched;
    /// callers treat that as a silent no-op. On acceptance the previous
    /// handle is released before the new one is opened, so no handle leaks
    /// across successive loads.
    pub fn load(&mut self, file: FileInput) -> Result<AudioSource> {
        if file.method == IngestMethod::Drop && !is_audio_mime(&file.mime_type) {
            tracing::debug!(mime = %file.mime_type, "rejecting non-audio drop");
            return Err(MoodError::invalid_input_type(file.mime_type));
        }

        // Release before acquire; if open fails below we are left with no
        // active source, which is a safe idle-equivalent state.
        self.release();

        let source = AudioSource::new(
            SourceId::new(self.next_generation),
            file.name,
            file.byte_len,
            file.mime_type,
        );
        let handle = self.backend.open(&source)?;
        self.next_generation += 1;

        tracing::debug!(id = %source.id, name = %source.name, "loaded source");
        self.active = Some(ActiveSource {
            source: source.clone(),
            handle,
        });
        Ok(source)
    }

    /// Release the active source and its handle
    ///
    /// Idempotent; releasing with nothing loaded is a no-op.
    pub fn release(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!(id = %active.source.id, "releasing source");
            drop(active.handle);
        }
    }

    /// Metadata of the active source, if any
    pub fn current(&self) -> Option<&AudioSource> {
        self.active.as_ref().map(|a| &a.source)
    }

    /// Generation tag of the active source, if any
    pub fn current_id(&self) -> Option<SourceId> {
        self.active.as_ref().map(|a| a.source.id)
    }

    /// Mutable borrow of the active handle, if any
    pub fn handle_mut(&mut self) -> Option<&mut (dyn MediaHandle + '_)> {
        self.active
            .as_mut()
            .map(|a| &mut *a.handle as &mut dyn MediaHandle)
    }

    /// The active source metadata together with its handle
    pub fn source_and_handle(&mut self) -> Option<(&AudioSource, &mut (dyn MediaHandle + '_))> {
        self.active
            .as_mut()
            .map(|a| (&a.source, &mut *a.handle as &mut dyn MediaHandle))
    }
}

impl Drop for MediaManager {
    fn drop(&mut self) {
        self.release();
    }
}
