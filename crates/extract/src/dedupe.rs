//! Order-stable deduplication of resource references.

use crate::models::ResourceReference;
use std::collections::HashSet;
use tracing::debug;

/// Removes references whose identity (absolute, query-stripped) URL has been
/// seen before. First occurrence wins; relative order of survivors matches
/// input order.
///
/// Duplicate markup is expected — thumbnail and full-size references on the
/// same page frequently resolve to the same asset — so drops are silent,
/// not errors.
pub fn dedupe(refs: Vec<ResourceReference>) -> Vec<ResourceReference> {
    let mut seen = HashSet::with_capacity(refs.len());
    refs.into_iter()
        .filter(|r| {
            let fresh = seen.insert(r.identity.clone());
            if !fresh {
                debug!(identity = %r.identity, kind = %r.kind, "dropping duplicate reference");
            }
            fresh
        })
        .collect()
}
