//! Error types for the Curio library.
//!
//! Scoring and ranking never fail. Errors only arise at the edges of the
//! crate: building analysis components with invalid parameters, loading
//! configuration, catalogs or data files, and validating CLI arguments.
//! All of them are represented by the [`CurioError`] enum.
//!
//! ```
//! use curio::error::{CurioError, Result};
//!
//! fn page_size(value: usize) -> Result<usize> {
//!     if value == 0 {
//!         return Err(CurioError::invalid_argument("page size must be positive"));
//!     }
//!     Ok(value)
//! }
//!
//! assert_eq!(
//!     page_size(0).unwrap_err().to_string(),
//!     "Invalid argument: page size must be positive"
//! );
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Curio operations.
#[derive(Error, Debug)]
pub enum CurioError {
    /// I/O errors (reading data, config or catalog files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid tokenizer or filter parameters)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Data-related errors (malformed artifact rows or catalogs)
    #[error("Data error: {0}")]
    Data(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CurioError.
pub type Result<T> = std::result::Result<T, CurioError>;

impl CurioError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CurioError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CurioError::Config(msg.into())
    }

    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        CurioError::Data(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CurioError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        CurioError::NotFound(msg.into())
    }
}
