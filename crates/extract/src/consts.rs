use scraper::Selector;
use std::sync::LazyLock;

/// Literal text preceding the digits in a listing's `id` attribute.
pub const DEFAULT_LISTING_PREFIX: &str = "PR";
/// Literal text following the digits in a listing's `id` attribute.
pub const DEFAULT_LISTING_SUFFIX: &str = "~";
/// Encoding assumed when a page source declares none.
pub const DEFAULT_ENCODING: &str = "utf-8";

pub const BUSINESS_NAME_LABEL: &str = "Business Name";
pub const AVERAGE_SCORE_FIELD: &str = "Average Score";
pub const HIGH_SCORE_FIELD: &str = "High Score";
pub const TOTAL_INSPECTIONS_FIELD: &str = "Total Inspections";

/// Substring an inspection row's first cell must contain (but not start with).
pub(crate) const INSPECTION_MARKER: &str = "inspection";

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

selector!(ID_SELECTOR, "[id]");
selector!(TBODY_SELECTOR, "tbody");
selector!(TR_SELECTOR, "tr");
