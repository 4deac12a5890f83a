//! The dispatch boundary for subject-page batch downloads.
//!
//! The extraction pipeline ([`snag-extract`](snag_extract)) produces
//! [`DownloadItem`](snag_extract::models::DownloadItem)s; this crate hands
//! them to whatever host actually executes downloads. It owns three things:
//!
//! - the [`DownloadBackend`](backend::DownloadBackend) trait — submit a URL
//!   plus desired filename, get an opaque handle or a failure,
//! - the [`NamingTable`](naming::NamingTable) — a session-scoped correlation
//!   map resolving the host's late naming-decision callback against the
//!   filenames we asked for, and
//! - [`run_batch`](batch::run_batch) — the strictly sequential submission
//!   loop with per-item failure isolation.

pub mod backend;
pub mod batch;
pub mod error;
pub mod naming;

pub use crate::backend::{DownloadBackend, DownloadHandle};
pub use crate::batch::{BatchSummary, run_batch};
pub use crate::naming::{ConflictPolicy, NamingDecision, NamingTable};
