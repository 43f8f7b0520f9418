//! Error types for the jibiki library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`JibikiError`] enum. The deinflection engine itself is a total
//! function and never fails; errors come from the dictionary-management side
//! (file I/O, JSON decoding, archive extraction, update downloads).
//!
//! # Examples
//!
//! ```
//! use jibiki::error::{JibikiError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(JibikiError::archive("invalid checksum for file index.json"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for jibiki operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-carrying
/// variants.
#[derive(Error, Debug)]
pub enum JibikiError {
    /// I/O errors (file operations, directory listing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zip archive format errors
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Archive extraction errors (checksum mismatch, path traversal)
    #[error("Archive error: {0}")]
    Archive(String),

    /// Revision parsing/comparison errors
    #[error("Revision error: {0}")]
    Revision(String),

    /// Dictionary download errors (unexpected status, missing content)
    #[error("Download error: {0}")]
    Download(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with JibikiError.
pub type Result<T> = std::result::Result<T, JibikiError>;

impl JibikiError {
    /// Create a new archive error.
    pub fn archive<S: Into<String>>(msg: S) -> Self {
        JibikiError::Archive(msg.into())
    }

    /// Create a new revision error.
    pub fn revision<S: Into<String>>(msg: S) -> Self {
        JibikiError::Revision(msg.into())
    }

    /// Create a new download error.
    pub fn download<S: Into<String>>(msg: S) -> Self {
        JibikiError::Download(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JibikiError::Other(msg.into())
    }
}
