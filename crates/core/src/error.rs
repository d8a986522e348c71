//! Error types for document acquisition.
//!
//! The extraction pipeline itself is total and never fails; errors can
//! only occur while acquiring the raw text in the first place.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a document for extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The path does not name a usable file.
    #[error("Path has no usable file name: {0}")]
    InvalidPath(String),
}
