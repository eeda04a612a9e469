//! Classifier capability and the file-name heuristic implementation

use crate::error::Result;
use mood_core::{AudioSource, Emotion};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Raw classifier output, before the pipeline stamps it with a source tag
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Dominant emotional tone
    pub primary: Emotion,

    /// Confidence score within the [0.80, 0.84) band
    pub confidence: f32,

    /// Optional secondary tone; never equal to `primary`
    pub secondary: Option<Emotion>,
}

/// Pluggable classification capability
///
/// The pipeline only depends on this contract, so the heuristic below can be
/// replaced by a real acoustic model without changing any caller.
pub trait Classifier: Send + Sync {
    /// Classify the given source
    ///
    /// # Errors
    /// Returns an error on any internal fault; callers treat a failed run
    /// the same as "not yet analyzed".
    fn classify(&self, source: &AudioSource) -> Result<Classification>;
}

/// Labels checked against the display name, in priority order.
/// The first substring match wins as the primary label.
const MATCH_PRIORITY: [Emotion; 4] = [Emotion::Happy, Emotion::Sad, Emotion::Fear, Emotion::Angry];

/// Confidence band bounds: uniform in [0.80, 0.84)
const CONFIDENCE_MIN: f32 = 0.80;
const CONFIDENCE_MAX: f32 = 0.84;

/// File-name heuristic with random fallback
///
/// Inspects the clip's display name (case-insensitively) for an emotion label
/// substring; picks uniformly at random when nothing matches. The confidence
/// band is fixed and narrow regardless of how the primary was chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristicClassifier;

impl NameHeuristicClassifier {
    /// Create a new heuristic classifier
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for NameHeuristicClassifier {
    fn classify(&self, source: &AudioSource) -> Result<Classification> {
        let mut rng = thread_rng();
        let name = source.name.to_lowercase();

        let primary = MATCH_PRIORITY
            .iter()
            .copied()
            .find(|label| name.contains(label.as_str()))
            .unwrap_or_else(|| {
                Emotion::ALL
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(Emotion::Happy)
            });

        let confidence = rng.gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX);

        // A secondary only adds information when the name itself does not
        // already carry the primary label.
        let secondary = if name.contains(primary.as_str()) {
            None
        } else {
            let others: Vec<Emotion> = Emotion::ALL
                .iter()
                .copied()
                .filter(|label| *label != primary)
                .collect();
            others.choose(&mut rng).copied()
        };

        Ok(Classification {
            primary,
            confidence,
            secondary,
        })
    }
}
