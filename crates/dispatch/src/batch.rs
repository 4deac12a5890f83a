//! Sequential batch submission with per-item failure isolation.

use crate::backend::DownloadBackend;
use crate::naming::NamingTable;
use serde::{Deserialize, Serialize};
use snag_extract::models::DownloadItem;
use tracing::{debug, instrument, warn};

/// Aggregate outcome of one batch invocation: how many submissions the host
/// accepted versus refused. A failure is terminal for that item within the
/// batch — no retry state is modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub started: u32,
    pub failed: u32,
}

/// Submits every item in order, one in-flight submission at a time.
///
/// The desired filename is registered in the [`NamingTable`] *before* its
/// submission, closing the race against the host's naming-decision callback.
/// An individual failure is caught, tallied, logged, and its table entry
/// dropped (no decision will arrive for it) — it never aborts the rest of
/// the batch: one bad reference must not block the others.
///
/// Sequential-not-concurrent is deliberate; it keeps reasoning about the
/// naming table simple at the cost of throughput. See the module docs of
/// [`naming`](crate::naming) for the correlation it protects.
#[instrument(skip_all, fields(backend = backend.name(), items = items.len()))]
pub async fn run_batch(backend: &dyn DownloadBackend, table: &NamingTable, items: &[DownloadItem]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for item in items {
        table.register(&item.url, &item.filename).await;
        match backend.submit(&item.url, &item.filename).await {
            Ok(handle) => {
                summary.started += 1;
                debug!(%handle, filename = %item.filename, "download started");
            },
            Err(error) => {
                summary.failed += 1;
                table.complete(&item.url).await;
                warn!(url = %item.url, filename = %item.filename, error = %&*error, "download failed");
            },
        }
    }
    summary
}
