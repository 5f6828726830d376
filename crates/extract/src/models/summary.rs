/// Aggregate statistics over a listing's inspection history.
///
/// All fields are zero for a listing without any usable inspection rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSummary {
    /// Mean of the valid scores
    pub average: f64,
    /// Highest valid score, or `0` if every score was lower (or missing)
    pub high: i64,
    /// Inspection rows whose score parsed as an integer
    pub samples: u32,
}
impl ScoreSummary {
    pub fn has_samples(&self) -> bool {
        self.samples > 0
    }
}
