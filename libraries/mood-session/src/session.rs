//! Session - command surface and observable streams

use mood_core::{EmotionResult, HandleEvent, MediaBackend, MoodError, SourceId};
use mood_inference::{InferencePipeline, PipelineConfig};
use mood_media::{FileInput, MediaManager};
use mood_playback::{PlaybackError, PlaybackStatus, PlayerController, PlayerEvent};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Shared mutable session state
///
/// Locked briefly per command; never held across an await point.
struct Inner {
    media: MediaManager,
    controller: PlayerController,
    result: Option<EmotionResult>,
    // Token of the in-flight analysis run, if any. Tokens are bumped per
    // analyze() call, so when runs over the same source overlap only the
    // newest one may clear the analyzing flag.
    analyzing_for: Option<u64>,
    analysis_seq: u64,

    status_tx: watch::Sender<PlaybackStatus>,
    result_tx: watch::Sender<Option<EmotionResult>>,
    analyzing_tx: watch::Sender<bool>,
}

impl Inner {
    fn publish_status(&self) {
        let _ = self.status_tx.send(self.controller.status());
    }

    fn clear_analysis(&mut self) {
        if self.result.take().is_some() {
            let _ = self.result_tx.send(None);
        }
        if self.analyzing_for.take().is_some() {
            let _ = self.analyzing_tx.send(false);
        }
    }
}

/// Session facade over one loaded clip
///
/// Commands lock the shared state briefly; analysis runs on a spawned task
/// and re-validates the source generation before applying its result.
pub struct Session {
    inner: Arc<Mutex<Inner>>,
    pipeline: Arc<InferencePipeline>,

    status_rx: watch::Receiver<PlaybackStatus>,
    result_rx: watch::Receiver<Option<EmotionResult>>,
    analyzing_rx: watch::Receiver<bool>,
}

impl Session {
    /// Create a session over the given host backend
    pub fn new(backend: Box<dyn MediaBackend>, config: PipelineConfig) -> Self {
        Self::with_pipeline(backend, InferencePipeline::new(config))
    }

    /// Create a session with a custom inference pipeline
    pub fn with_pipeline(backend: Box<dyn MediaBackend>, pipeline: InferencePipeline) -> Self {
        let (status_tx, status_rx) = watch::channel(PlaybackStatus::default());
        let (result_tx, result_rx) = watch::channel(None);
        let (analyzing_tx, analyzing_rx) = watch::channel(false);

        let inner = Inner {
            media: MediaManager::new(backend),
            controller: PlayerController::new(),
            result: None,
            analyzing_for: None,
            analysis_seq: 0,
            status_tx,
            result_tx,
            analyzing_tx,
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
            pipeline: Arc::new(pipeline),
            status_rx,
            result_rx,
            analyzing_rx,
        }
    }

    // ===== Commands =====

    /// Load a file, replacing the active clip
    ///
    /// A non-audio drop is a silent no-op: prior source, playback state, and
    /// emotion result all stay untouched. A successful load resets playback
    /// to Idle, discards any pending play suspension, and clears the emotion
    /// result (analysis is source-specific).
    pub fn load_file(&self, file: FileInput) -> mood_core::Result<()> {
        let mut inner = self.lock();

        match inner.media.load(file) {
            Ok(_) => {}
            Err(MoodError::InvalidInputType { mime_type }) => {
                tracing::debug!(mime = %mime_type, "ignoring non-audio drop");
                return Ok(());
            }
            Err(e) => {
                // The previous handle is already gone; fall back to a clean
                // idle state rather than keeping a half-attached controller.
                tracing::warn!("load failed: {e}");
                inner.controller.detach();
                inner.clear_analysis();
                inner.publish_status();
                return Err(e);
            }
        }

        // Split borrows: controller and media are disjoint fields.
        let Inner {
            media, controller, ..
        } = &mut *inner;
        if let Some((source, handle)) = media.source_and_handle() {
            controller.attach(source, handle);
        }

        inner.clear_analysis();
        inner.publish_status();
        Ok(())
    }

    /// Toggle between playing and paused
    pub fn toggle_playback(&self) -> mood_playback::Result<()> {
        let mut inner = self.lock();
        let Inner {
            media, controller, ..
        } = &mut *inner;

        let result = match media.handle_mut() {
            Some(handle) => controller.toggle_playback(handle),
            None => Err(PlaybackError::NoSourceLoaded),
        };

        // Publish even on failure: a start error forces the phase to Idle.
        inner.publish_status();
        result
    }

    /// Toggle the mute flag
    pub fn toggle_mute(&self) {
        let mut inner = self.lock();
        let Inner {
            media, controller, ..
        } = &mut *inner;

        if let Some(handle) = media.handle_mut() {
            controller.toggle_mute(handle);
        }
        inner.publish_status();
    }

    /// Forward a notification from the host media primitive
    pub fn handle_media_event(&self, event: HandleEvent) {
        let mut inner = self.lock();
        let Inner {
            media, controller, ..
        } = &mut *inner;

        if let Some(handle) = media.handle_mut() {
            controller.handle_event(event, handle);
        }
        inner.publish_status();
    }

    /// Run emotion inference over the loaded clip
    ///
    /// Fire-and-forget: flips the analyzing flag, spawns the pipeline, and
    /// applies the result only if the source generation still matches when it
    /// resolves. Without a loaded clip this is a no-op.
    pub fn analyze(&self) {
        let (source, run_token) = {
            let mut inner = self.lock();
            let Some(source) = inner.media.current().cloned() else {
                tracing::debug!("analyze requested with no source loaded");
                return;
            };
            inner.analysis_seq += 1;
            let run_token = inner.analysis_seq;
            inner.analyzing_for = Some(run_token);
            let _ = inner.analyzing_tx.send(true);
            (source, run_token)
        };

        let inner_arc = Arc::clone(&self.inner);
        let pipeline = Arc::clone(&self.pipeline);
        tokio::spawn(async move {
            let outcome = pipeline.analyze(&source).await;

            let Ok(mut inner) = inner_arc.lock() else {
                return;
            };
            match outcome {
                Ok(result) => {
                    if inner.media.current_id() == Some(result.source_id) {
                        inner.result = Some(result.clone());
                        let _ = inner.result_tx.send(Some(result));
                    } else {
                        tracing::debug!(
                            id = %result.source_id,
                            "discarding analysis for a superseded source"
                        );
                    }
                }
                Err(e) => {
                    // Non-fatal: result stays absent, flag gets cleared below.
                    tracing::error!("analysis failed: {e}");
                }
            }
            // Only the latest run may lower the flag; an older overlapping
            // run finishing here must not hide that analysis is ongoing.
            if inner.analyzing_for == Some(run_token) {
                inner.analyzing_for = None;
                let _ = inner.analyzing_tx.send(false);
            }
        });
    }

    // ===== Observables =====

    /// Subscribe to playback status updates
    pub fn status_stream(&self) -> watch::Receiver<PlaybackStatus> {
        self.status_rx.clone()
    }

    /// Subscribe to emotion result updates (`None` = absent)
    pub fn result_stream(&self) -> watch::Receiver<Option<EmotionResult>> {
        self.result_rx.clone()
    }

    /// Subscribe to the analyzing flag
    pub fn analyzing_stream(&self) -> watch::Receiver<bool> {
        self.analyzing_rx.clone()
    }

    /// Snapshot of the current playback status
    pub fn status(&self) -> PlaybackStatus {
        self.lock().controller.status()
    }

    /// Snapshot of the current emotion result
    pub fn emotion_result(&self) -> Option<EmotionResult> {
        self.lock().result.clone()
    }

    /// Whether an analysis is in flight for the active source
    pub fn is_analyzing(&self) -> bool {
        self.lock().analyzing_for.is_some()
    }

    /// Generation tag of the active source, if any
    pub fn current_source(&self) -> Option<SourceId> {
        self.lock().media.current_id()
    }

    /// Drain the controller's pending events
    pub fn take_player_events(&self) -> Vec<PlayerEvent> {
        self.lock().controller.take_events()
    }

    // ===== Internal =====

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Commands are short and self-contained; a poisoned lock still holds
        // consistent state, so recover the guard instead of panicking.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
