use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

/// Path prefix that identifies a purchase-download endpoint. Anchors that
/// don't point here are navigation/decoration, not attachments.
pub(crate) const ATTACHMENT_PATH_PREFIX: &str = "/subjects/purchases/download/";

/// Subject title fallback when neither the page heading nor the URL slug
/// yields anything usable.
pub(crate) const PLACEHOLDER_TITLE: &str = "unknown-subject";

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Primary tier: images inside the gallery carousel.
selector!(GALLERY_IMG_SELECTOR, "ul.slides li img");
// Fallback tier: every image on the page, filtered by subject association.
selector!(ANY_IMG_SELECTOR, "img");
selector!(HEADING_SELECTOR, "h1");
// Purchase-file containers; anchors are filtered by href prefix afterwards,
// since attribute substring selectors can't match a resolved path.
selector!(PURCHASE_CONTAINER_SELECTOR, "div.pb-30");
selector!(PURCHASE_ANCHOR_SELECTOR, "a[href]");
selector!(TRUNC_SELECTOR, ".trunc");

// Subject pages carry the catalog id as a `subject-<digits>` path segment.
regex!(SUBJECT_ID_REGEX, r"(?i)subject-(\d+)");
// Full-segment form, used to locate the title slug that follows it.
regex!(SUBJECT_SEGMENT_REGEX, r"(?i)^subject-\d+$");
regex!(IMAGE_EXT_REGEX, r"(?i)\.(jpg|jpeg|png|webp|gif)(?:$|\?)");
regex!(TRAILING_EXT_REGEX, r"(?i)\.([a-z0-9]+)$");
