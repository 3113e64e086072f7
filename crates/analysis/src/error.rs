//! Error types for analysis operations.

use thiserror::Error;

/// Errors that can occur during analysis operations.
///
/// Odd punctuation, unknown senders, and unrecognized line shapes are not
/// errors: extraction silently filters them. The only recoverable condition,
/// a decode failure, is handled inside the line normalizer and never
/// surfaces here.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No valid messages survived extraction; nothing to classify.
    #[error("no valid chat messages found in the transcript")]
    EmptyInput,
    /// Classifier or vectorizer artifact failed to load.
    #[error("model loading error: {0}")]
    ModelLoading(String),
    /// The classifier failed to produce predictions.
    #[error("classifier error: {0}")]
    Classifier(String),
    /// I/O operation error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Artifact deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
