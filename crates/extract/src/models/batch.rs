use super::DownloadItem;
use serde::{Deserialize, Serialize};

/// The assembled output of a full extraction pass: two ordered dispatch
/// lists, one per resource kind.
///
/// Order within each list follows document order, so assembling the same
/// page twice yields byte-identical lists (idempotent naming relies on it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadBatch {
    pub images: Vec<DownloadItem>,
    pub attachments: Vec<DownloadItem>,
}

impl DownloadBatch {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.attachments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.attachments.len()
    }

    /// All items in dispatch order: images first, then attachments.
    pub fn all(&self) -> Vec<DownloadItem> {
        self.images.iter().chain(self.attachments.iter()).cloned().collect()
    }
}
