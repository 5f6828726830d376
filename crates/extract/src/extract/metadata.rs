use scraper::ElementRef;
use tracing::instrument;

use crate::consts;
use crate::models::Metadata;
use crate::rows::MetadataRow;

/// Running state while folding over metadata rows.
#[derive(Debug, Default)]
struct Labelled {
    /// Most recent non-empty label; rows without one continue it.
    current: String,
    metadata: Metadata,
}
impl Labelled {
    fn push(mut self, row: MetadataRow<'_>) -> Self {
        let label = row.label();
        if !label.is_empty() {
            self.current = label;
        } else if self.metadata.is_empty() {
            tracing::debug!("first metadata row is unlabelled");
        }
        self.metadata.push(&self.current, row.value());
        self
    }
}

/// Builds the label/value mapping from a listing's metadata table.
///
/// Only two-cell rows sitting directly in the listing's first `<tbody>` are
/// read. A row with a blank label cell belongs to the most recent labelled
/// row, so values that wrap onto several rows stay together.
#[instrument(level = "trace", skip_all, fields(id = listing.value().id()))]
pub fn extract_metadata(listing: ElementRef<'_>) -> Metadata {
    let Some(container) = listing.select(&consts::TBODY_SELECTOR).next() else {
        tracing::debug!("listing has no table body");
        return Metadata::new();
    };
    container
        .child_elements()
        .filter_map(MetadataRow::from_element)
        .fold(Labelled::default(), Labelled::push)
        .metadata
}
