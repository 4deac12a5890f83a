use std::fmt::{Display, Formatter, Result as FmtResult};

/// Kind of downloadable resource discovered on a subject page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Gallery or hero image.
    Image,
    /// Purchased-file download link.
    Attachment,
}
impl ResourceKind {
    /// Returns the display string for the resource kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Attachment => "attachment",
        }
    }
}
impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A discovered downloadable item, before filename synthesis turns it into a
/// [`DownloadItem`](super::DownloadItem).
///
/// Created during extraction and consumed immediately; never mutated, never
/// persisted. Within a kind-scoped result set, `identity` is unique after
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    /// Attribute value exactly as found in markup.
    pub raw: String,
    /// Absolute dispatch URL. Attachments retain their query string (expiry
    /// tokens keep the link valid); images do not.
    pub url: String,
    /// Absolute, query-stripped form; the deduplication key.
    pub identity: String,
    pub kind: ResourceKind,
    /// Human label used in attachment naming. Images carry none.
    pub hint: Option<String>,
}

impl ResourceReference {
    /// An image reference: dispatch URL and identity are both the
    /// query-stripped form.
    pub fn image(raw: impl Into<String>, identity: impl Into<String>) -> Self {
        let identity = identity.into();
        Self {
            raw: raw.into(),
            url: identity.clone(),
            identity,
            kind: ResourceKind::Image,
            hint: None,
        }
    }

    /// An attachment reference: dispatch URL keeps its query string, while
    /// identity uses the query-stripped form.
    pub fn attachment(
        raw: impl Into<String>,
        url: impl Into<String>,
        identity: impl Into<String>,
        hint: impl Into<Option<String>>,
    ) -> Self {
        Self {
            raw: raw.into(),
            url: url.into(),
            identity: identity.into(),
            kind: ResourceKind::Attachment,
            hint: hint.into().filter(|h| !h.is_empty()),
        }
    }
}
