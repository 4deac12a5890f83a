//! In-memory download backend for testing.

use super::{DownloadBackend, DownloadHandle};
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory download backend for testing.
///
/// Records every submission behind a [`RwLock`], so all trait methods can
/// operate on `&self` without external synchronisation, and hands out
/// sequential handles. URLs containing one of the configured failure
/// substrings are refused with [`ErrorKind::Unreachable`], which is how
/// tests exercise the batch runner's partial-failure policy.
///
/// # Examples
///
/// ```
/// use snag_dispatch::backend::{DownloadBackend, MockBackend};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = MockBackend::default().failing_on(["blocked"]);
/// backend.submit("https://cdn.example.com/ok.jpg", "a.jpg").await?;
/// assert!(backend.submit("https://cdn.example.com/blocked.jpg", "b.jpg").await.is_err());
/// assert_eq!(backend.submissions().await.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct MockBackend {
    name: String,
    next_handle: AtomicU64,
    fail_matching: Vec<String>,
    submissions: RwLock<Vec<(String, String)>>,
}

impl MockBackend {
    /// Change the name of the mock backend.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Refuse any URL containing one of the given substrings.
    pub fn failing_on(mut self, substrings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fail_matching.extend(substrings.into_iter().map(Into::into));
        self
    }

    /// Snapshot of all accepted `(url, filename)` submissions, in order.
    pub async fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl DownloadBackend for MockBackend {
    fn name(&self) -> &str {
        if self.name.is_empty() { "mock" } else { &self.name }
    }

    async fn submit(&self, url: &str, filename: &str) -> Result<DownloadHandle> {
        // Hosts refuse filenames with path separators outright.
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(exn::Exn::from(ErrorKind::Rejected(filename.to_string())));
        }
        if let Some(matched) = self.fail_matching.iter().find(|s| url.contains(s.as_str())) {
            return Err(exn::Exn::from(ErrorKind::Unreachable(format!("{url} (matched {matched:?})"))));
        }
        self.submissions.write().await.push((url.to_string(), filename.to_string()));
        Ok(DownloadHandle(self.next_handle.fetch_add(1, Ordering::Relaxed) + 1))
    }
}
