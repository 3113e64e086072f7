//! Command-line interface for Moodline.
//!
//! Two commands: `analyze` runs the sentiment pipeline over a transcript
//! file and prints (or exports) the results; `serve` starts the HTTP API.

#![deny(missing_docs, unsafe_code)]

pub mod app;
pub mod commands;
pub mod error;
pub mod export;

pub use error::{CliError, Result};
