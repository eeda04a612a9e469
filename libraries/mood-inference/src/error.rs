//! Error types for emotion inference

use thiserror::Error;

/// Inference errors
///
/// Never fatal: the caller logs the failure, leaves the result absent, and
/// clears its in-progress flag.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The classifier itself failed
    #[error("Classifier error: {0}")]
    Classifier(String),
}

/// Result type for inference operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
