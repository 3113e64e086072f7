//! Transcript parsing and sentiment classification pipeline for Moodline.
//!
//! This crate implements the whole analysis pipeline: byte decoding and line
//! normalization, message extraction from WhatsApp-style exports, text
//! cleaning matched to the classifier's training pipeline, the
//! threshold-based decision engine, and aggregation into a chat report.
//!
//! Data flows one way: bytes -> lines -> messages -> cleaned messages ->
//! probability distributions -> labelled results -> report. Each stage owns
//! its input and produces a new immutable value.

#![deny(missing_docs, unsafe_code)]

/// Byte decoding and transcript line normalization.
pub mod normalize;

/// Message extraction from chat-export lines.
pub mod extract;

/// Text cleaning matched to the classifier's training pipeline.
pub mod clean;

/// Sentiment classifier interface and the loadable linear model.
pub mod classifier;

/// Probability-to-label decision engine.
pub mod decision;

/// Aggregation of per-message results into a chat report.
pub mod report;

/// The immutable analysis context tying the pipeline together.
pub mod pipeline;

/// Error types for analysis operations.
pub mod error;

pub use error::{AnalysisError, AnalysisResult};
pub use pipeline::AnalysisContext;
