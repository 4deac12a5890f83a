use std::fmt::{Display, Formatter, Result as FmtResult};

/// The catalog entity whose page is being scraped.
///
/// Derived once per extraction pass and immutable thereafter. The `id` comes
/// from the `subject-<digits>` segment of the page URL and may be empty when
/// the page doesn't carry one; the `title` is sanitized and never empty
/// (a constant placeholder is substituted as a last resort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Numeric catalog identifier, as a string (may be empty if unmatched).
    pub id: String,
    /// Sanitized display title.
    pub title: String,
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Subject-{} ({})", self.id, self.title)
    }
}
