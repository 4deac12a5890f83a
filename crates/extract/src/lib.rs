//! Extraction-and-naming pipeline for subject-page batch downloads.
//!
//! Given the HTML of a catalog subject page and its URL, this crate walks
//! the document for gallery images and purchase attachments, canonicalizes
//! and deduplicates the discovered references, and synthesizes
//! deterministic, filesystem-safe filenames — producing the two ordered
//! dispatch lists a download boundary consumes.

mod consts;
mod dedupe;
pub mod error;
mod extract;
mod filename;
pub mod models;
mod normalize;

pub use crate::dedupe::dedupe;
pub use crate::extract::Extractor;
pub use crate::filename::{attachment_filename, image_filename, sanitize_component};
pub use crate::normalize::Normalizer;

use crate::error::Result;
use crate::models::{DownloadBatch, DownloadItem};
use tracing::{debug, instrument};

/// Easy, top-level entrypoint: runs the full pipeline over a page.
///
/// Derives the [`Subject`](models::Subject) once, extracts and deduplicates
/// each resource kind independently, and maps every surviving reference
/// through the filename synthesizer. Image ordinals are the post-dedup
/// positions, 1-based and contiguous, so a dropped duplicate never leaves a
/// gap in the numbering.
///
/// The output is deterministic: assembling the same document twice produces
/// byte-identical filename lists in the same order.
///
/// # Errors
///
/// Fails only when `page_url` cannot be parsed — extraction itself is
/// best-effort and an unexpected layout simply yields an empty batch.
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn assemble(html: impl AsRef<str>, page_url: &str) -> Result<DownloadBatch> {
    let extractor = Extractor::new(html.as_ref(), page_url)?;
    let subject = extractor.subject();

    let images = dedupe(extractor.images())
        .into_iter()
        .enumerate()
        .map(|(index, reference)| {
            let filename = filename::image_filename(&subject.id, &subject.title, index + 1, &reference.identity);
            DownloadItem::new(reference.url, filename)
        })
        .collect();
    let attachments = dedupe(extractor.attachments())
        .into_iter()
        .map(|reference| {
            let hint = reference.hint.as_deref().unwrap_or_default();
            let filename = filename::attachment_filename(&subject.id, &subject.title, hint, &reference.identity);
            DownloadItem::new(reference.url, filename)
        })
        .collect();

    let batch = DownloadBatch { images, attachments };
    debug!(subject = %subject, images = batch.images.len(), attachments = batch.attachments.len(), "assembled batch");
    Ok(batch)
}
