//! URL canonicalization for discovered resource references.
//!
//! Markup attributes on subject pages are messy: values arrive wrapped in
//! stray backticks or quotes, relative to the page, and decorated with query
//! strings (CDN sizing parameters, expiry tokens). This module produces the
//! two canonical forms the pipeline needs:
//!
//! - the **absolute** form, query preserved — what attachments dispatch,
//!   since purchase links embed expiry tokens that must survive, and
//! - the **identity** form, query and fragment stripped — the deduplication
//!   key, and also what images dispatch (CDN sizing params are noise).
//!
//! Normalization is best-effort: input that cannot be parsed as a URL is
//! returned unchanged rather than raised as an error.

use crate::consts;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use url::Url;

/// Strips wrapping backtick/quote characters that occasionally leak into
/// scraped attribute values.
pub(crate) fn clean_wrapping(raw: &str) -> &str {
    raw.trim().trim_matches(|c| matches!(c, '`' | '\'' | '"'))
}

/// Resolves raw attribute values against the document base URL.
#[derive(Debug, Clone)]
pub struct Normalizer {
    base: Url,
}

impl Normalizer {
    /// Parses the page URL that all relative references resolve against.
    ///
    /// This is the only fallible step of normalization; individual reference
    /// values are handled best-effort afterwards.
    pub fn new(page_url: &str) -> Result<Self> {
        let base = Url::parse(page_url).or_raise(|| ErrorKind::InvalidPageUrl(page_url.to_string()))?;
        Ok(Self { base })
    }

    /// The absolute dispatch form: cleaned, resolved against the page,
    /// query string preserved. Unparseable input is returned as-is.
    pub fn absolute(&self, raw: &str) -> String {
        let cleaned = clean_wrapping(raw);
        match self.base.join(cleaned) {
            Ok(url) => url.to_string(),
            Err(_) => cleaned.to_string(),
        }
    }

    /// The deduplication identity: absolute with query and fragment
    /// stripped. Unparseable input is returned as-is.
    pub fn identity(&self, raw: &str) -> String {
        let cleaned = clean_wrapping(raw);
        match self.base.join(cleaned) {
            Ok(mut url) => {
                url.set_query(None);
                url.set_fragment(None);
                url.to_string()
            },
            Err(_) => cleaned.to_string(),
        }
    }

    /// Path component of the page URL (where the subject id segment lives).
    pub(crate) fn page_path(&self) -> &str {
        self.base.path()
    }
}

/// Returns `true` when the reference points at a known image type
/// (jpg/jpeg/png/webp/gif), tolerating a trailing query string.
pub(crate) fn is_image_url(url: &str) -> bool {
    consts::IMAGE_EXT_REGEX.is_match(url)
}

/// Trailing dot-suffix of the query-stripped URL, if any.
pub(crate) fn url_ext(url: &str) -> Option<&str> {
    let stripped = url.split(['?', '#']).next().unwrap_or(url);
    consts::TRAILING_EXT_REGEX.captures(stripped).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn normalizer() -> Normalizer {
        Normalizer::new("https://catalog.example.com/subjects/subject-104978/my-title").unwrap()
    }

    #[test]
    fn test_invalid_page_url() {
        let err = Normalizer::new("not a url").unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidPageUrl(_)));
        assert!(!err.is_retryable());
    }

    #[rstest]
    #[case("`https://cdn.example.com/a.jpg`", "https://cdn.example.com/a.jpg")]
    #[case("  'https://cdn.example.com/a.jpg'  ", "https://cdn.example.com/a.jpg")]
    #[case("\"/relative/path\"", "/relative/path")]
    #[case("plain", "plain")]
    fn test_clean_wrapping(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_wrapping(raw), expected);
    }

    #[test]
    fn test_absolute_resolves_relative() {
        let n = normalizer();
        assert_eq!(
            n.absolute("/subjects/purchases/download/55?expire=999"),
            "https://catalog.example.com/subjects/purchases/download/55?expire=999"
        );
    }

    #[test]
    fn test_absolute_keeps_query() {
        let n = normalizer();
        assert_eq!(n.absolute("https://cdn.example.com/a.jpg?x=1"), "https://cdn.example.com/a.jpg?x=1");
    }

    #[test]
    fn test_identity_strips_query_and_fragment() {
        let n = normalizer();
        assert_eq!(n.identity("https://cdn.example.com/a.jpg?x=1#frag"), "https://cdn.example.com/a.jpg");
        assert_eq!(n.identity("/img/b.png?size=large"), "https://catalog.example.com/img/b.png");
    }

    #[test]
    fn test_unparseable_returned_unchanged() {
        let n = normalizer();
        // A scheme-prefixed value with an invalid host can't be joined.
        assert_eq!(n.absolute("https://["), "https://[");
        assert_eq!(n.identity("https://["), "https://[");
    }

    #[rstest]
    #[case("https://cdn.example.com/a.jpg", true)]
    #[case("https://cdn.example.com/a.JPEG?x=1", true)]
    #[case("https://cdn.example.com/a.webp", true)]
    #[case("https://cdn.example.com/a.gif?v=2", true)]
    #[case("https://cdn.example.com/a.svg", false)]
    #[case("https://cdn.example.com/a.jpg.html", false)]
    #[case("", false)]
    fn test_is_image_url(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_image_url(url), expected);
    }

    #[rstest]
    #[case("https://cdn.example.com/a.jpg?x=1", Some("jpg"))]
    #[case("https://cdn.example.com/file.PDF", Some("PDF"))]
    #[case("https://example.com/subjects/purchases/download/55?expire=999", None)]
    #[case("https://example.com/", None)]
    fn test_url_ext(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(url_ext(url), expected);
    }
}
