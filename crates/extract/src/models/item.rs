use serde::{Deserialize, Serialize};

/// The unit handed to the dispatch boundary: a resolved URL plus the exact
/// on-disk filename we want the host to use.
///
/// Constructed from a [`ResourceReference`](super::ResourceReference) and the
/// page [`Subject`](super::Subject), immutable, passed once to the dispatch
/// boundary. The filename contains only characters safe across common
/// filesystems — no path separators, no reserved punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadItem {
    pub url: String,
    pub filename: String,
}

impl DownloadItem {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self { url: url.into(), filename: filename.into() }
    }
}
