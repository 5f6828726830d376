//! Extraction of restaurant inspection records from King County food safety
//! results pages.
//!
//! A results page holds one block per restaurant, identified by an `id` such
//! as `PR0084952~`. Each block carries a two-column metadata table (name,
//! address, phone, ...) and a four-column inspection history. The pipeline:
//!
//! 1. [`Document::parse`] decodes and leniently parses the page,
//! 2. [`Locator::find_listings`] finds the restaurant blocks,
//! 3. [`extract_metadata`] and [`extract_scores`] read each block, and
//! 4. [`Extractor::results`] keys the records by business name.

mod clean;
pub mod consts;
mod document;
pub mod error;
mod extract;
mod locate;
pub mod models;
mod rows;

use tracing::instrument;

pub use crate::clean::{clean, string};
pub use crate::document::Document;
use crate::error::Result;
pub use crate::extract::{Extractor, extract_metadata, extract_scores, inspection};
pub use crate::locate::{ListingPattern, Locator, find_listings};
use crate::models::Results;
pub use crate::rows::{InspectionRow, MetadataRow, cells, is_inspection_row, is_metadata_row};

/// Easy, top-level entrypoint: raw page bytes and their declared encoding
/// in, restaurant records out.
///
/// Fails only when the page can't be decoded; individual rows that don't
/// make sense are skipped. See [`Extractor`] for more control.
#[instrument(skip(content), fields(content_size = content.as_ref().len()))]
pub fn extract(content: impl AsRef<[u8]>, encoding: &str) -> Result<Results> {
    Ok(Extractor::from_bytes(content, encoding)?.results())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const PAGE: &[u8] = br#"<!DOCTYPE html>
<html><head><title>Food Establishment Inspection Data</title></head>
<body><table><tr><td id="contentcol">
<div id="PR0084952~" name="PR0084952~" style="display:none;">
  <table style="width: 635px;"><tbody>
    <tr><td class="promptTextBox">- Business Name</td><td class="promptTextBox">SPICE ROUTE</td></tr>
    <tr><td class="promptTextBox">Address:</td><td class="promptTextBox">2500 152ND AVE NE</td></tr>
    <tr><td class="promptTextBox"></td><td class="promptTextBox">Redmond, WA 98052</td></tr>
    <tr><td colspan="2"><table>
      <tr><td>Inspection Type</td><td>Date</td><td>Score</td><td>Result</td></tr>
      <tr><td>&nbsp;&nbsp;Routine Inspection/Field Review</td><td>06/19/2014</td><td>10</td><td>Unsatisfactory</td></tr>
      <tr><td>&nbsp;&nbsp;Return Inspection</td><td>07/01/2014</td><td>0</td><td>Satisfactory</td></tr>
      <tr><td>&nbsp;&nbsp;Consultation/Education - Field</td><td>01/03/2014</td><td></td><td>Complete</td></tr>
    </table></td></tr>
  </tbody></table>
</div>
<div id="PR0012345~" name="PR0012345~" style="display:none;">
  <table><tbody>
    <tr><td>- Business Name</td><td>CAF&Eacute; LUCIA</td></tr>
    <tr><td colspan="2"><table>
      <tr><td>&nbsp;Routine Inspection/Field Review</td><td>02/02/2014</td><td>n/a</td><td>Unsatisfactory</td></tr>
    </table></td></tr>
  </tbody></table>
</div>
</td></tr></table></body></html>"#;

    #[test]
    fn test_extract_page() {
        let results = extract(PAGE, "utf-8").unwrap();
        assert_eq!(results.len(), 2);

        let spice = results.get("SPICE ROUTE").unwrap();
        assert_eq!(spice.metadata.get("Address").unwrap(), ["2500 152ND AVE NE", "Redmond, WA 98052"]);
        assert_eq!(spice.scores.samples, 2);
        assert_eq!(spice.scores.high, 10);
        assert_eq!(spice.scores.average, 5.0);

        let lucia = results.get("CAF\u{c9} LUCIA").unwrap();
        assert_eq!(lucia.scores.samples, 0);
        assert_eq!(lucia.scores.average, 0.0);
    }

    #[test]
    fn test_extract_rejects_undecodable_page() {
        let err = extract(b"<div id=\"PR1~\">\xff\xfe\xfd</div>", "utf-8").unwrap_err();
        assert!(matches!(*err, ErrorKind::Decode { .. }));
    }
}
