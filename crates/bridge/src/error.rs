//! Bridge Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A bridge error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The extraction pipeline could not run (bad page URL).
    #[display("extraction failed")]
    Extract,
    /// The incoming message could not be understood.
    #[display("transport error: {_0}")]
    Transport(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Malformed messages and unparseable page URLs stay malformed.
        false
    }
}
