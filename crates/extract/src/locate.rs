//! Locating the per-restaurant listing blocks inside a results page.

use exn::ResultExt;
use regex::{Regex, escape as regex_escape};
use scraper::ElementRef;
use std::sync::LazyLock;
use tracing::instrument;

use crate::consts::{self, DEFAULT_LISTING_PREFIX, DEFAULT_LISTING_SUFFIX};
use crate::document::Document;
use crate::error::{ErrorKind, Result};

static DEFAULT_LISTING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| ListingPattern::default().regex().unwrap());

/// The shape of a listing's `id` attribute: a literal prefix, one or more
/// ASCII digits, then a literal suffix (`PR0084952~`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPattern {
    pub prefix: String,
    pub suffix: String,
}
impl ListingPattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    fn regex(&self) -> Result<Regex> {
        let source = format!("{}[0-9]+{}", regex_escape(&self.prefix), regex_escape(&self.suffix));
        Regex::new(&source).or_raise(|| ErrorKind::InvalidPattern(source.clone()))
    }
}
impl Default for ListingPattern {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_PREFIX, DEFAULT_LISTING_SUFFIX)
    }
}

/// Finds listing nodes by matching their `id` attribute.
///
/// The match is a search, not an anchored match: an identifier only needs
/// to *contain* the pattern.
#[derive(Debug, Clone)]
pub struct Locator {
    regex: Regex,
}
impl Locator {
    pub fn new(pattern: &ListingPattern) -> Result<Self> {
        Ok(Self { regex: pattern.regex()? })
    }

    /// Returns `true` if the element's identifier marks it as a listing.
    pub fn is_listing(&self, element: ElementRef<'_>) -> bool {
        element.value().id().is_some_and(|id| self.regex.is_match(id))
    }

    /// Every listing in the document, at any depth, in document order.
    ///
    /// An empty result is not an error; a search with no hits produces a
    /// page with no listings on it.
    #[instrument(level = "debug", skip_all, fields(listings))]
    pub fn find_listings<'a>(&self, document: &'a Document) -> Vec<ElementRef<'a>> {
        let listings: Vec<_> = document
            .html()
            .select(&consts::ID_SELECTOR)
            .filter(|element| self.is_listing(*element))
            .collect();
        tracing::Span::current().record("listings", listings.len());
        listings
    }
}
impl Default for Locator {
    fn default() -> Self {
        Self {
            regex: DEFAULT_LISTING_REGEX.clone(),
        }
    }
}

/// [`Locator::find_listings`] with the default `PR<digits>~` pattern.
pub fn find_listings(document: &Document) -> Vec<ElementRef<'_>> {
    Locator::default().find_listings(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(listings: &[ElementRef<'_>]) -> Vec<String> {
        listings.iter().filter_map(|l| l.value().id()).map(str::to_string).collect()
    }

    #[test]
    fn test_finds_nested_listings_in_document_order() {
        let document = Document::from_html(
            r#"<table><tr><td id="contentcol">
                <div id="PR0001~">first</div>
                <div><section><div id="PR0042~">second</div></section></div>
                <span id="PR7~">third</span>
            </td></tr></table>"#,
        );
        assert_eq!(ids(&find_listings(&document)), ["PR0001~", "PR0042~", "PR7~"]);
    }

    #[rstest]
    #[case("<div>no identifiers at all</div>")]
    #[case(r#"<div id="PR~">no digits</div>"#)]
    #[case(r#"<div id="PR123">no suffix</div>"#)]
    #[case(r#"<div id="pr123~">wrong case</div>"#)]
    #[case(r#"<div id="contentcol"><div class="PR123~">class, not id</div></div>"#)]
    fn test_no_listings(#[case] html: &str) {
        assert!(find_listings(&Document::from_html(html)).is_empty());
    }

    #[test]
    fn test_pattern_is_searched_not_anchored() {
        let document = Document::from_html(r#"<div id="xPR12~y">embedded</div>"#);
        assert_eq!(find_listings(&document).len(), 1);
    }

    #[test]
    fn test_custom_pattern_is_escaped() {
        let locator = Locator::new(&ListingPattern::new("R.", "+")).unwrap();
        let document = Document::from_html(r#"<div id="R.55+">yes</div><div id="RX55+">no</div>"#);
        assert_eq!(ids(&locator.find_listings(&document)), ["R.55+"]);
    }
}
