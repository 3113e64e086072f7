//! Application configuration for Moodline.

use crate::constants;
use crate::types::DecisionPolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for Moodline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MoodlineConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,

    /// Classifier artifact configuration.
    pub model: ModelConfig,

    /// Pipeline behavior configuration.
    pub pipeline: PipelineConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Enable CORS.
    pub enable_cors: bool,

    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

/// Location of the serialized classifier and vectorizer artifacts.
///
/// The artifacts are loaded once at process start and treated as opaque,
/// immutable capabilities from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory holding the model and vectorizer artifacts.
    pub model_dir: PathBuf,
}

/// Pipeline behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Decision policy converting probabilities into labels.
    pub policy: DecisionPolicy,

    /// Platform notice fragments that disqualify a transcript line.
    pub system_phrases: Vec<String>,

    /// Media placeholder marker that disqualifies a message body.
    pub media_marker: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: constants::DEFAULT_HTTP_PORT,
            enable_cors: true,
            cors_allowed_origins: Vec::new(),
            max_upload_bytes: constants::MAX_UPLOAD_FILE_SIZE,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("moodline")
                .join("models"),
        }
    }
}

impl ModelConfig {
    /// Path to the serialized classifier artifact.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(constants::MODEL_ARTIFACT_FILE)
    }

    /// Path to the serialized vectorizer artifact.
    pub fn vectorizer_path(&self) -> PathBuf {
        self.model_dir.join(constants::VECTORIZER_ARTIFACT_FILE)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            policy: DecisionPolicy::default(),
            system_phrases: constants::DEFAULT_SYSTEM_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
            media_marker: constants::MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl MoodlineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.http.max_upload_bytes == 0 {
            return Err(Error::validation("max_upload_bytes must be positive"));
        }
        if self.pipeline.media_marker.trim().is_empty() {
            return Err(Error::validation("media_marker must not be empty"));
        }
        Ok(())
    }
}
