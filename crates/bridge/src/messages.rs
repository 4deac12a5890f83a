//! Wire types for the page ↔ privileged messaging transport.
//!
//! The JSON shapes are fixed by the existing protocol and must not drift:
//!
//! ```text
//! trigger:   {"kind":"downloadImages" | "downloadAttachments" | "downloadAll"}
//! request:   {"kind":"downloadItems","items":[{"url":…,"filename":…},…]}
//! response:  {"ok":true,"summary":{"started":2,"failed":1}}
//!            {"ok":false,"error":"…"}
//! ```

use serde::{Deserialize, Serialize};
use snag_dispatch::BatchSummary;
use snag_extract::models::DownloadItem;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Privileged-to-page instruction: which subset of the page to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Trigger {
    #[serde(rename = "downloadImages")]
    DownloadImages,
    #[serde(rename = "downloadAttachments")]
    DownloadAttachments,
    #[serde(rename = "downloadAll")]
    DownloadAll,
}
impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::DownloadImages => "downloadImages",
            Trigger::DownloadAttachments => "downloadAttachments",
            Trigger::DownloadAll => "downloadAll",
        }
    }
}
impl Display for Trigger {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Page-to-privileged batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Request {
    #[serde(rename = "downloadItems")]
    DownloadItems { items: Vec<DownloadItem> },
}

/// Privileged-to-page batch outcome.
///
/// Failures carry only a string description and the aggregate counts — there
/// is no per-item error detail and no retry mechanism on this surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<BatchSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn success(summary: BatchSummary) -> Self {
        Self { ok: true, summary: Some(summary), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { ok: false, summary: None, error: Some(error.into()) }
    }
}
