//! Deterministic, filesystem-safe filename synthesis.
//!
//! Filenames embed the subject id and title so a directory full of downloads
//! stays greppable, plus an ordinal (images) or a link-text hint
//! (attachments) for collision resistance within one page's batch. Given
//! identical inputs the templates produce identical output — re-running
//! extraction on an unchanged page must yield the same names, which is what
//! lets the host's conflict policy behave predictably.
//!
//! Shapes:
//!
//! ```text
//! Subject-<id>_<Sanitized-Title>_<NN>.<ext>            (images)
//! Subject-<id>_<Sanitized-Title>_<Hint>.<ext>          (attachments)
//! ```

use crate::normalize;

/// Characters unsafe in filenames across common filesystems.
const UNSAFE: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replaces filesystem-reserved punctuation with spaces, collapses
/// whitespace runs, and trims.
pub fn sanitize_component(s: &str) -> String {
    let replaced: String = s.chars().map(|c| if UNSAFE.contains(&c) { ' ' } else { c }).collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitizes and hyphenates a title or hint for embedding in a filename.
fn component(s: &str) -> String {
    sanitize_component(s).replace(' ', "-")
}

/// Builds the filename for the `ordinal`-th image of a subject.
///
/// The ordinal is zero-padded to two digits; the extension is taken from the
/// query-stripped URL, defaulting to `jpg`.
pub fn image_filename(subject_id: &str, subject_title: &str, ordinal: usize, url: &str) -> String {
    let ext = normalize::url_ext(url).unwrap_or("jpg");
    format!("Subject-{}_{}_{:02}.{}", subject_id, component(subject_title), ordinal, ext)
}

/// Builds the filename for an attachment, using the link-text hint (or the
/// literal `attachment` when no hint was found). Extension defaults to `bin`
/// since purchase-download endpoints rarely expose one in the path.
pub fn attachment_filename(subject_id: &str, subject_title: &str, hint: &str, url: &str) -> String {
    let ext = normalize::url_ext(url).unwrap_or("bin");
    let hint = Some(component(hint)).filter(|h| !h.is_empty()).unwrap_or_else(|| "attachment".to_string());
    format!("Subject-{}_{}_{}.{}", subject_id, component(subject_title), hint, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("My Title", "My Title")]
    #[case("  spaced   out  ", "spaced out")]
    #[case("a\\b/c:d*e?f\"g<h>i|j", "a b c d e f g h i j")]
    #[case("***", "")]
    fn test_sanitize_component(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_component(input), expected);
    }

    #[test]
    fn test_image_filename_shape() {
        let name = image_filename("104978", "My Title", 1, "https://cdn.example.com/a.jpg");
        assert_eq!(name, "Subject-104978_My-Title_01.jpg");
    }

    #[test]
    fn test_image_filename_ext_fallback() {
        let name = image_filename("104978", "My Title", 12, "https://cdn.example.com/asset");
        assert_eq!(name, "Subject-104978_My-Title_12.jpg");
    }

    #[test]
    fn test_attachment_filename_shape() {
        let name = attachment_filename(
            "104978",
            "My Title",
            "Instructions PDF",
            "https://catalog.example.com/subjects/purchases/download/55?expire=999",
        );
        assert_eq!(name, "Subject-104978_My-Title_Instructions-PDF.bin");
    }

    #[test]
    fn test_attachment_hint_fallback() {
        let name = attachment_filename("1", "T", "", "https://example.com/dl/9");
        assert_eq!(name, "Subject-1_T_attachment.bin");
    }

    #[test]
    fn test_attachment_ext_from_path() {
        let name = attachment_filename("1", "T", "Manual", "https://example.com/files/manual.pdf?expire=1");
        assert_eq!(name, "Subject-1_T_Manual.pdf");
    }

    #[rstest]
    #[case("Weird: Title * With ? Everything|")]
    #[case("\\\\/::**??\"\"<<>>||")]
    #[case("plain title")]
    fn test_filename_safety(#[case] title: &str) {
        let name = image_filename("42", title, 3, "https://cdn.example.com/x.png");
        assert!(!name.contains(['\\', '/', ':', '*', '?', '"', '<', '>', '|']), "unsafe char in {name:?}");
    }

    #[test]
    fn test_deterministic() {
        let a = image_filename("9", "Same Input", 7, "https://cdn.example.com/p.webp");
        let b = image_filename("9", "Same Input", 7, "https://cdn.example.com/p.webp");
        assert_eq!(a, b);
    }
}
