//! Turning listing blocks into inspection records.

mod metadata;
mod scores;

use std::convert::Infallible;
use std::str::FromStr;

pub use self::metadata::extract_metadata;
pub use self::scores::extract_scores;
use crate::document::Document;
use crate::error::Result;
use crate::locate::{ListingPattern, Locator};
use crate::models::{Inspection, Results};
use scraper::{ElementRef, Html};
use tracing::instrument;

/// Reads one listing's metadata table and inspection history.
pub fn inspection(listing: ElementRef<'_>) -> Inspection {
    Inspection::new(extract_metadata(listing), extract_scores(listing))
}

#[derive(Debug)]
pub struct Extractor {
    document: Document,
    locator: Locator,
}
impl Extractor {
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            locator: Locator::default(),
        }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Document::from_html(html))
    }

    /// Decodes and parses raw page content. See [`Document::parse`].
    pub fn from_bytes(content: impl AsRef<[u8]>, encoding: &str) -> Result<Self> {
        Ok(Self::from_document(Document::parse(content, encoding)?))
    }

    /// Swaps the default `PR<digits>~` listing identifier for another.
    pub fn with_pattern(self, pattern: &ListingPattern) -> Result<Self> {
        Ok(self.with_locator(Locator::new(pattern)?))
    }

    pub fn with_locator(self, locator: Locator) -> Self {
        Self { locator, ..self }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn listings(&self) -> Vec<ElementRef<'_>> {
        self.locator.find_listings(&self.document)
    }

    /// Extracts every listing and keys it by business name.
    ///
    /// When two listings share a name the later one wins. Listings without a
    /// business name can't be keyed and are skipped. A page without listings
    /// produces empty results, not an error.
    #[instrument(skip(self), fields(listings, results))]
    pub fn results(&self) -> Results {
        let listings = self.listings();
        tracing::Span::current().record("listings", listings.len());
        let mut results = Results::new();
        for listing in listings {
            let inspection = self::inspection(listing);
            let Some(name) = inspection.name().map(str::to_string) else {
                tracing::warn!(id = listing.value().id(), "skipping listing without a business name");
                continue;
            };
            if results.insert(name.as_str(), inspection).is_some() {
                tracing::debug!(name = %name, "later listing replaces earlier one with the same name");
            }
        }
        tracing::Span::current().record("results", results.len());
        results
    }
}
impl FromStr for Extractor {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<Document> for Extractor {
    fn from(document: Document) -> Self {
        Self::from_document(document)
    }
}
impl From<Html> for Extractor {
    fn from(html: Html) -> Self {
        Self::from_document(html.into())
    }
}

impl From<Extractor> for Results {
    fn from(extractor: Extractor) -> Self {
        extractor.results()
    }
}
