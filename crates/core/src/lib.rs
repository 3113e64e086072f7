//! Core types, errors, and configuration for Moodline
//!
//! This crate provides the foundational types and error handling used
//! throughout the Moodline chat sentiment analyzer: the sentiment label
//! vocabulary, the report structures produced by an analysis run, and the
//! application configuration.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::MoodlineConfig;
pub use error::{Error, Result};
pub use types::*;
