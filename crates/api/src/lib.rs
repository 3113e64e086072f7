//! HTTP API server for Moodline transcript analysis.
//!
//! One endpoint does the work: a multipart transcript upload comes in,
//! a JSON [`moodline_core::types::ChatReport`] goes out. The analysis
//! context is built once at startup and shared read-only across requests.

#![deny(missing_docs, unsafe_code)]

pub mod analyze;
pub mod config;
pub mod error;
pub mod router;
pub mod server;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::ApiServer;
