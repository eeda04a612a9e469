//! Emotion labels and inference results

use super::source::SourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dominant emotional tone of a clip
///
/// Closed label set; classifiers never produce anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Fearful / anxious tone
    Fear,

    /// Angry / aggressive tone
    Angry,

    /// Sad / melancholic tone
    Sad,

    /// Happy / upbeat tone
    Happy,
}

impl Emotion {
    /// All labels in the closed set
    pub const ALL: [Emotion; 4] = [Emotion::Fear, Emotion::Angry, Emotion::Sad, Emotion::Happy];

    /// Lowercase label text, as it appears in file names
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Fear => "fear",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Happy => "happy",
        }
    }

    /// Parse a label from its lowercase text
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "fear" => Some(Emotion::Fear),
            "angry" => Some(Emotion::Angry),
            "sad" => Some(Emotion::Sad),
            "happy" => Some(Emotion::Happy),
            _ => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inference output for one loaded clip
///
/// A result is only ever valid for the source it was computed from; the
/// embedded `source_id` generation tag is how stale results get detected
/// and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Generation tag of the source this result belongs to
    pub source_id: SourceId,

    /// Dominant emotional tone
    pub primary: Emotion,

    /// Confidence score, always within the [0.80, 0.84) band
    pub confidence: f32,

    /// Optional secondary tone; never equal to `primary`
    pub secondary: Option<Emotion>,
}
