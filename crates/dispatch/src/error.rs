//! Dispatch Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A dispatch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The host refused the requested filename.
    #[display("filename rejected by host: {_0}")]
    Rejected(#[error(not(source))] String),
    /// The URL is unreachable or blocked by the host.
    #[display("unreachable URL: {_0}")]
    Unreachable(#[error(not(source))] String),
    /// Any other host-side failure to start the download.
    #[display("backend error: {_0}")]
    Backend(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Within a single batch a failure is terminal for that item — no retry
    /// state is modeled — but callers running a fresh batch can use this to
    /// decide whether re-submitting is worth it.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Backend(_))
    }
}
