use scraper::ElementRef;
use tracing::instrument;

use crate::consts;
use crate::models::ScoreSummary;
use crate::rows::InspectionRow;

/// Running totals while folding over inspection rows.
#[derive(Debug, Default)]
struct Tally {
    candidates: u32,
    rejected: u32,
    total: i64,
    high: i64,
}
impl Tally {
    fn record(mut self, row: InspectionRow<'_>) -> Self {
        self.candidates += 1;
        match row.score() {
            Some(score) => {
                self.total = self.total.saturating_add(score);
                // Strictly greater: the first of several equal highs stands.
                if score > self.high {
                    self.high = score;
                }
            },
            None => {
                tracing::debug!(kind = %row.kind(), score = %row.raw_score(), "skipping unparseable score");
                self.rejected += 1;
            },
        }
        self
    }

    fn summary(self) -> ScoreSummary {
        let samples = self.candidates - self.rejected;
        let average = if samples > 0 {
            self.total as f64 / f64::from(samples)
        } else {
            0.0
        };
        ScoreSummary {
            average,
            high: self.high,
            samples,
        }
    }
}

/// Summarizes the scores of every inspection row beneath a listing.
///
/// Rows whose score cell isn't an integer are left out of the statistics
/// entirely rather than counted as zero.
#[instrument(level = "trace", skip_all, fields(id = listing.value().id()))]
pub fn extract_scores(listing: ElementRef<'_>) -> ScoreSummary {
    listing
        .select(&consts::TR_SELECTOR)
        .filter_map(InspectionRow::from_element)
        .fold(Tally::default(), Tally::record)
        .summary()
}
