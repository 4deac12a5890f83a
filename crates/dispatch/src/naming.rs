//! Session-scoped correlation between submitted URLs and desired filenames.
//!
//! Hosts that own the final naming step (a browser's download manager, for
//! instance) decide the on-disk name *after* a download has been submitted,
//! via a callback carrying the candidate URL. That leaves a short-lived
//! request/response correlation problem: "we asked for this filename" on one
//! side, "the host asks us to confirm a name for this URL" on the other.
//!
//! [`NamingTable`] is that correlation map, owned by a session-scoped
//! context and passed into both the submission path and the naming-decision
//! adapter. Entries are registered before submission and removed explicitly
//! — on completion, on a failed submission, or wholesale at session
//! teardown — so the table never grows without bound across sessions.
//!
//! Keys are the query-stripped form of the URL, since hosts report candidate
//! URLs with or without their volatile query strings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tokio::sync::RwLock;
use tracing::trace;
use url::Url;

/// What the host should do when the suggested filename already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Append a counter rather than overwrite — the only policy this system
    /// ever suggests, since filenames are deterministic across re-runs.
    #[default]
    Uniquify,
    Overwrite,
    Prompt,
}
impl ConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictPolicy::Uniquify => "uniquify",
            ConflictPolicy::Overwrite => "overwrite",
            ConflictPolicy::Prompt => "prompt",
        }
    }
}
impl Display for ConflictPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// The answer handed back through the host's naming callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingDecision {
    pub filename: String,
    pub conflict: ConflictPolicy,
}

/// Session-scoped map from query-stripped URL to desired filename.
///
/// All methods take `&self`; the map lives behind a [`RwLock`] so the
/// submission loop and the host's naming-decision adapter can share one
/// table without external synchronisation.
#[derive(Debug, Default)]
pub struct NamingTable {
    entries: RwLock<HashMap<String, String>>,
}

impl NamingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the filename we want for `url`, replacing any previous entry
    /// for the same identity.
    pub async fn register(&self, url: &str, filename: &str) {
        let key = identity_key(url);
        trace!(%key, filename, "registering desired filename");
        self.entries.write().await.insert(key, filename.to_string());
    }

    /// Pure lookup-and-respond contract for the host's naming callback:
    /// returns the pre-registered decision for `candidate_url`, or `None`
    /// to let the host's default naming apply.
    ///
    /// Non-destructive — hosts may probe more than once for the same
    /// download. Removal happens via [`complete`](Self::complete).
    pub async fn resolve(&self, candidate_url: &str) -> Option<NamingDecision> {
        let key = identity_key(candidate_url);
        self.entries.read().await.get(&key).map(|filename| NamingDecision {
            filename: filename.clone(),
            conflict: ConflictPolicy::Uniquify,
        })
    }

    /// Drop the entry for `candidate_url` once its download has completed
    /// (or its submission failed and no decision will ever arrive).
    /// Returns `true` if an entry was present.
    pub async fn complete(&self, candidate_url: &str) -> bool {
        self.entries.write().await.remove(&identity_key(candidate_url)).is_some()
    }

    /// Session teardown: drop everything.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Query- and fragment-stripped form of an absolute URL; unparseable input
/// is used verbatim (best-effort, same policy as extraction-side
/// normalization).
fn identity_key(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        },
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_strips_query() {
        let table = NamingTable::new();
        table.register("https://cdn.example.com/a.jpg", "Subject-1_T_01.jpg").await;
        // The host reports the candidate with its volatile query attached.
        let decision = table.resolve("https://cdn.example.com/a.jpg?session=abc").await.unwrap();
        assert_eq!(decision.filename, "Subject-1_T_01.jpg");
        assert_eq!(decision.conflict, ConflictPolicy::Uniquify);
    }

    #[tokio::test]
    async fn test_resolve_unknown_is_none() {
        let table = NamingTable::new();
        assert!(table.resolve("https://cdn.example.com/other.jpg").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_is_non_destructive() {
        let table = NamingTable::new();
        table.register("https://cdn.example.com/a.jpg", "a.jpg").await;
        assert!(table.resolve("https://cdn.example.com/a.jpg").await.is_some());
        assert!(table.resolve("https://cdn.example.com/a.jpg").await.is_some());
    }

    #[tokio::test]
    async fn test_complete_removes_entry() {
        let table = NamingTable::new();
        table.register("https://cdn.example.com/a.jpg?x=1", "a.jpg").await;
        assert!(table.complete("https://cdn.example.com/a.jpg").await);
        assert!(table.resolve("https://cdn.example.com/a.jpg").await.is_none());
        assert!(!table.complete("https://cdn.example.com/a.jpg").await);
    }

    #[tokio::test]
    async fn test_clear() {
        let table = NamingTable::new();
        table.register("https://a/1.jpg", "one").await;
        table.register("https://a/2.jpg", "two").await;
        assert_eq!(table.len().await, 2);
        table.clear().await;
        assert!(table.is_empty().await);
    }

    #[test]
    fn test_conflict_policy_wire_value() {
        let json = serde_json::to_string(&ConflictPolicy::Uniquify).unwrap();
        assert_eq!(json, r#""uniquify""#);
    }
}
