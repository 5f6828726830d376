//! Structural classification of table rows.
//!
//! Only a row's *direct* `<td>` children are considered, so rows belonging to
//! tables nested inside a cell never leak into their parent's shape.

use scraper::ElementRef;

use crate::clean::clean;
use crate::consts::INSPECTION_MARKER;

/// The direct `<td>` children of an element.
pub fn cells(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.child_elements().filter(|child| child.value().name() == "td").collect()
}

fn is_row(element: ElementRef<'_>) -> bool {
    element.value().name() == "tr"
}

/// A two-cell label/value row.
#[derive(Debug, Clone, Copy)]
pub struct MetadataRow<'a> {
    label: ElementRef<'a>,
    value: ElementRef<'a>,
}
impl<'a> MetadataRow<'a> {
    pub fn from_element(element: ElementRef<'a>) -> Option<Self> {
        if !is_row(element) {
            return None;
        }
        let cells = cells(element);
        let [label, value] = cells[..] else {
            return None;
        };
        Some(Self { label, value })
    }

    /// Cleaned label text; empty for continuation rows.
    pub fn label(&self) -> String {
        clean(self.label)
    }

    pub fn value(&self) -> String {
        clean(self.value)
    }
}

/// A four-cell inspection history row (type, date, score, result).
#[derive(Debug, Clone, Copy)]
pub struct InspectionRow<'a> {
    cells: [ElementRef<'a>; 4],
}
impl<'a> InspectionRow<'a> {
    /// Accepts detail rows whose first cell mentions an inspection without
    /// starting with the word, which rules out the table's header row.
    pub fn from_element(element: ElementRef<'a>) -> Option<Self> {
        if !is_row(element) {
            return None;
        }
        let cells: [ElementRef<'a>; 4] = cells(element).try_into().ok()?;
        let kind = clean(cells[0]).to_lowercase();
        (kind.contains(INSPECTION_MARKER) && !kind.starts_with(INSPECTION_MARKER)).then_some(Self { cells })
    }

    pub fn kind(&self) -> String {
        clean(self.cells[0])
    }

    /// Cleaned text of the score cell, which may not be numeric.
    pub fn raw_score(&self) -> String {
        clean(self.cells[2])
    }

    /// The score, if the score cell holds an integer.
    pub fn score(&self) -> Option<i64> {
        self.raw_score().parse().ok()
    }
}

pub fn is_metadata_row(element: ElementRef<'_>) -> bool {
    MetadataRow::from_element(element).is_some()
}

pub fn is_inspection_row(element: ElementRef<'_>) -> bool {
    InspectionRow::from_element(element).is_some()
}
