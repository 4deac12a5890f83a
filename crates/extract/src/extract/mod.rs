//! Main extraction logic for subject detail pages.

use crate::consts;
use crate::error::Result;
use crate::filename;
use crate::models::{ResourceReference, Subject};
use crate::normalize::{self, Normalizer};
use scraper::{ElementRef, Html};
use tracing::{debug, instrument};

/// Walks a parsed subject page for downloadable resource references.
///
/// All extraction follows document order and applies containment filters
/// (gallery / purchase containers) plus identity filters (image extension
/// set, purchase-endpoint path prefix). Extraction itself never fails; an
/// unexpected page layout simply yields fewer references.
#[derive(Debug)]
pub struct Extractor {
    document: Html,
    normalizer: Normalizer,
}

impl Extractor {
    /// Parses the page HTML and its URL. The URL is the only fallible input:
    /// without it, relative references have no base and the subject id has
    /// no source.
    pub fn new(html: &str, page_url: &str) -> Result<Self> {
        Ok(Self {
            document: Html::parse_document(html),
            normalizer: Normalizer::new(page_url)?,
        })
    }

    /// Derives the page [`Subject`] — once per extraction pass.
    ///
    /// The id comes from the `subject-<digits>` segment of the page URL and
    /// is empty when unmatched. The title prefers the main heading, falls
    /// back to the URL slug following the subject segment, and finally to a
    /// constant placeholder so it is never empty.
    pub fn subject(&self) -> Subject {
        let id = self.subject_id().unwrap_or_default();
        let title = self
            .heading_title()
            .or_else(|| self.slug_title())
            .unwrap_or_else(|| consts::PLACEHOLDER_TITLE.to_string());
        Subject { id, title }
    }

    fn subject_id(&self) -> Option<String> {
        consts::SUBJECT_ID_REGEX
            .captures(self.normalizer.page_path())
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn heading_title(&self) -> Option<String> {
        self.document
            .select(&consts::HEADING_SELECTOR)
            .next()
            .map(|el| filename::sanitize_component(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty())
    }

    /// Title slug inferred from the URL: the path segment following
    /// `subject-<id>`, with separator runs collapsed to spaces.
    fn slug_title(&self) -> Option<String> {
        let segments: Vec<&str> = self.normalizer.page_path().split('/').filter(|s| !s.is_empty()).collect();
        let position = segments.iter().position(|s| consts::SUBJECT_SEGMENT_REGEX.is_match(s))?;
        let slug = segments.get(position + 1)?;
        let spaced: String = slug.chars().map(|c| if matches!(c, '-' | '_') { ' ' } else { c }).collect();
        Some(filename::sanitize_component(&spaced)).filter(|s| !s.is_empty())
    }

    /// Collects image references with the two-tier policy: the gallery
    /// carousel first, and only when that yields nothing, a whole-document
    /// scan filtered by subject association.
    #[instrument(skip(self))]
    pub fn images(&self) -> Vec<ResourceReference> {
        let gallery = self.gallery_images();
        if !gallery.is_empty() {
            debug!(count = gallery.len(), "collected gallery images");
            return gallery;
        }
        // Not every page layout uses a carousel.
        let heroes = self.hero_images();
        debug!(count = heroes.len(), "gallery empty, collected hero images");
        heroes
    }

    fn gallery_images(&self) -> Vec<ResourceReference> {
        self.document
            .select(&consts::GALLERY_IMG_SELECTOR)
            .filter_map(|img| self.image_reference(img))
            .collect()
    }

    /// Builds an image reference from an `img` element, preferring the
    /// deferred-load attribute: `data-src` holds the final full-resolution
    /// asset while `src` may hold a low-resolution placeholder.
    fn image_reference(&self, img: ElementRef<'_>) -> Option<ResourceReference> {
        let raw = img.value().attr("data-src").or_else(|| img.value().attr("src"))?;
        let cleaned = normalize::clean_wrapping(raw);
        if cleaned.is_empty() || !normalize::is_image_url(cleaned) {
            return None;
        }
        Some(ResourceReference::image(raw, self.normalizer.identity(raw)))
    }

    /// Fallback tier: accept any image plausibly associated with the current
    /// subject. Association is an OR of two heuristics — alt-text containing
    /// `subject-<id>`, or the resource path containing the subject-scoped
    /// segment (or its thumbnail mirror). With no subject id known at all,
    /// any generic subject-scoped path qualifies. The association check
    /// keeps unrelated navigation/decoration images out.
    fn hero_images(&self) -> Vec<ResourceReference> {
        let subject_id = self.subject_id();
        let mut refs = Vec::new();
        for img in self.document.select(&consts::ANY_IMG_SELECTOR) {
            let Some(raw) = img.value().attr("data-src").or_else(|| img.value().attr("src")) else {
                continue;
            };
            let cleaned = normalize::clean_wrapping(raw);
            if cleaned.is_empty() || !normalize::is_image_url(cleaned) {
                continue;
            }
            let alt = img.value().attr("alt").unwrap_or_default().to_lowercase();
            let path = self.normalizer.identity(raw).to_lowercase();
            let associated = match &subject_id {
                Some(id) => {
                    alt.contains(&format!("subject-{id}"))
                        || path.contains(&format!("/subjects/subject-{id}/"))
                        || path.contains(&format!("/thumbs/subjects/subject-{id}/"))
                },
                None => path.contains("/subjects/"),
            };
            if associated {
                refs.push(ResourceReference::image(raw, self.normalizer.identity(raw)));
            }
        }
        refs
    }

    /// Collects attachment references from the purchase-file containers:
    /// anchors pointing at the purchase-download endpoint, with a naming
    /// hint taken from a nested truncated-title element's `title` attribute
    /// when present, else the anchor's visible text.
    #[instrument(skip(self))]
    pub fn attachments(&self) -> Vec<ResourceReference> {
        let mut refs = Vec::new();
        for container in self.document.select(&consts::PURCHASE_CONTAINER_SELECTOR) {
            for anchor in container.select(&consts::PURCHASE_ANCHOR_SELECTOR) {
                let Some(raw) = anchor.value().attr("href") else {
                    continue;
                };
                let cleaned = normalize::clean_wrapping(raw);
                if cleaned.is_empty() || !cleaned.contains(consts::ATTACHMENT_PATH_PREFIX) {
                    continue;
                }
                let hint = Self::attachment_hint(anchor);
                refs.push(ResourceReference::attachment(
                    raw,
                    self.normalizer.absolute(raw),
                    self.normalizer.identity(raw),
                    hint,
                ));
            }
        }
        debug!(count = refs.len(), "collected purchase attachments");
        refs
    }

    fn attachment_hint(anchor: ElementRef<'_>) -> Option<String> {
        anchor
            .select(&consts::TRUNC_SELECTOR)
            .next()
            .and_then(|t| t.value().attr("title"))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| {
                let text = anchor.text().collect::<String>();
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
    }
}
