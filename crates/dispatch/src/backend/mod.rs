//! Download backend trait and implementations.
//!
//! This module defines the `DownloadBackend` trait, the crate's boundary to
//! whatever host actually executes downloads (a browser download service, a
//! fetch sidecar, a test double). The core never performs network I/O
//! itself; it hands the host a URL plus the exact filename it wants and
//! receives an opaque handle or a failure.

// Always compiled for this crate's own tests; exported behind the `mock`
// feature for other crates' dev dependencies.
#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use self::mock::MockBackend;
use crate::error::Result;
use async_trait::async_trait;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Opaque identifier for a download the host has accepted.
///
/// The handle carries no semantics here — it exists so a caller can
/// correlate host-side progress events with submissions if it wants to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownloadHandle(pub u64);
impl Display for DownloadHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "download#{}", self.0)
    }
}

/// Unified interface to the host's download execution service.
///
/// Submission is asynchronous: the future resolves once the host has
/// *started* (or refused) the download, not when the file lands on disk.
/// Implementations must not retry internally — failure policy belongs to
/// the batch runner, which counts a failed item and moves on.
///
/// # Examples
///
/// ```
/// use snag_dispatch::backend::DownloadBackend;
/// use snag_dispatch::error::Result;
///
/// async fn submit_one(backend: &dyn DownloadBackend) -> Result<()> {
///     let handle = backend
///         .submit("https://cdn.example.com/a.jpg", "Subject-1_Title_01.jpg")
///         .await?;
///     println!("host accepted as {handle}");
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DownloadBackend: Send + Sync {
    /// Name of the configured backend (used for logging only).
    fn name(&self) -> &str;

    /// Ask the host to start downloading `url` under `filename`.
    ///
    /// Fails with [`Unreachable`](crate::error::ErrorKind::Unreachable) when
    /// the URL is blocked or unfetchable, and
    /// [`Rejected`](crate::error::ErrorKind::Rejected) when the host refuses
    /// the filename.
    async fn submit(&self, url: &str, filename: &str) -> Result<DownloadHandle>;
}
