use super::{Metadata, ScoreSummary};

/// One restaurant's inspection record: its metadata table plus score
/// statistics from its inspection history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inspection {
    pub metadata: Metadata,
    pub scores: ScoreSummary,
}
impl Inspection {
    pub fn new(metadata: Metadata, scores: ScoreSummary) -> Self {
        Self { metadata, scores }
    }

    /// The restaurant's name, used to key the extraction results.
    pub fn name(&self) -> Option<&str> {
        self.metadata.business_name()
    }
}

/// Serializes as a single flat object: every metadata label alongside the
/// `Average Score`, `High Score` and `Total Inspections` fields. A metadata
/// label that collides with a score field is shadowed by the score.
#[cfg(feature = "serde")]
impl serde::Serialize for Inspection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use crate::consts::{AVERAGE_SCORE_FIELD, HIGH_SCORE_FIELD, TOTAL_INSPECTIONS_FIELD};
        use serde::ser::SerializeMap;

        const SCORE_FIELDS: [&str; 3] = [AVERAGE_SCORE_FIELD, HIGH_SCORE_FIELD, TOTAL_INSPECTIONS_FIELD];
        let labels = self.metadata.iter().filter(|(label, _)| !SCORE_FIELDS.contains(label));
        let mut map = serializer.serialize_map(None)?;
        for (label, values) in labels {
            map.serialize_entry(label, values)?;
        }
        map.serialize_entry(AVERAGE_SCORE_FIELD, &self.scores.average)?;
        map.serialize_entry(HIGH_SCORE_FIELD, &self.scores.high)?;
        map.serialize_entry(TOTAL_INSPECTIONS_FIELD, &self.scores.samples)?;
        map.end()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_flat() {
        let metadata: Metadata = [("Business Name", "Cafe X"), ("Address", "123 Main St"), ("Address", "Seattle")]
            .into_iter()
            .collect();
        let inspection = Inspection::new(
            metadata,
            ScoreSummary {
                average: 89.5,
                high: 92,
                samples: 2,
            },
        );
        let json = serde_json::to_value(&inspection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Business Name": ["Cafe X"],
                "Address": ["123 Main St", "Seattle"],
                "Average Score": 89.5,
                "High Score": 92,
                "Total Inspections": 2,
            })
        );
    }

    #[test]
    fn test_score_fields_shadow_metadata() {
        let metadata: Metadata = [("Business Name", "Cafe X"), ("High Score", "bogus")].into_iter().collect();
        let json = serde_json::to_value(Inspection::new(metadata, ScoreSummary::default())).unwrap();
        assert_eq!(json["High Score"], 0);
        assert_eq!(json["Average Score"], 0.0);
    }
}
