//! Configuration for the Moodline API server.

use moodline_core::config::MoodlineConfig;
use std::net::SocketAddr;

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind the TCP listener to.
    pub bind_addr: SocketAddr,
    /// Enable CORS.
    pub enable_cors: bool,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl ApiConfig {
    /// Derive the API configuration from the application configuration.
    pub fn from_config(config: &MoodlineConfig) -> moodline_core::Result<Self> {
        let bind_addr = format!("{}:{}", config.http.host, config.http.port)
            .parse()
            .map_err(|e| {
                moodline_core::Error::config(format!(
                    "invalid bind address {}:{}: {e}",
                    config.http.host, config.http.port
                ))
            })?;
        Ok(Self {
            bind_addr,
            enable_cors: config.http.enable_cors,
            cors_allowed_origins: config.http.cors_allowed_origins.clone(),
            max_upload_bytes: config.http.max_upload_bytes,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_config(&MoodlineConfig::default()).expect("default config is a valid address")
    }
}
