//! Error types shared across the workspace.
//!
//! The `FeedError` enum unifies the failure cases the demo driver can hit
//! while reading input: I/O, formatting/validation, and price-file parsing.
//! The observer core itself never fails; these variants exist for the code
//! that feeds it.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the demo binary.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a price-list file into `f64` values.
    #[error("Parse prices file error: {0}")]
    ParsePricesFile(String),
}
