//! Inference pipeline - latency simulation and result stamping

use crate::{
    classifier::{Classifier, NameHeuristicClassifier},
    error::Result,
};
use mood_core::{AudioSource, EmotionResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the inference pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fixed minimum latency per run (default: 1500 ms)
    ///
    /// Simulates processing cost so callers can show an in-progress
    /// indicator; a real model would replace this with its own runtime.
    pub min_latency: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_latency: Duration::from_millis(1500),
        }
    }
}

/// Emotion inference pipeline
///
/// Wraps a [`Classifier`] with the fixed minimum latency and stamps every
/// result with the generation tag of the source it was computed from. The
/// await point never blocks other operations; callers that suspend here must
/// check the tag before applying the result.
pub struct InferencePipeline {
    classifier: Box<dyn Classifier>,
    config: PipelineConfig,
}

impl Default for InferencePipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl InferencePipeline {
    /// Create a pipeline with the default file-name heuristic
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_classifier(Box::new(NameHeuristicClassifier::new()), config)
    }

    /// Create a pipeline over a custom classifier
    pub fn with_classifier(classifier: Box<dyn Classifier>, config: PipelineConfig) -> Self {
        Self { classifier, config }
    }

    /// Analyze a source and produce a fresh result
    ///
    /// Suspends for the configured minimum latency before classification.
    /// The returned record carries `source.id`; it is only valid for that
    /// source and must be discarded if the active source changed meanwhile.
    pub async fn analyze(&self, source: &AudioSource) -> Result<EmotionResult> {
        tokio::time::sleep(self.config.min_latency).await;

        let classification = self.classifier.classify(source)?;
        tracing::debug!(
            id = %source.id,
            primary = %classification.primary,
            confidence = classification.confidence,
            "analysis complete"
        );

        Ok(EmotionResult {
            source_id: source.id,
            primary: classification.primary,
            confidence: classification.confidence,
            secondary: classification.secondary,
        })
    }
}
