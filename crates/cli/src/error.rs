//! Error types for the Moodline CLI.

use thiserror::Error;

/// Main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] moodline_core::Error),

    /// Analysis pipeline error.
    #[error("Analysis error: {0}")]
    Analysis(#[from] moodline_analysis::AnalysisError),

    /// API server error.
    #[error("Server error: {0}")]
    Api(#[from] moodline_api::ApiError),

    /// Output serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
