//! Search parameters understood by the inspection results endpoint.

use exn::OptionExt;

use crate::error::{ErrorKind, Result};

/// Every recognized parameter with its default, in the order they're sent.
pub const PARAMETERS: [(&str, &str); 16] = [
    ("Output", "W"),
    ("Business_Name", ""),
    ("Business_Address", ""),
    ("Longitude", ""),
    ("Latitude", ""),
    ("City", ""),
    ("Zip_Code", ""),
    ("Inspection_Type", "All"),
    ("Inspection_Start", ""),
    ("Inspection_End", ""),
    ("Inspection_Closed_Business", ""),
    ("Violation_Points", ""),
    ("Violation_Red_Points", ""),
    ("Violation_Descr", ""),
    ("Fuzzy_Search", "N"),
    ("Sort", "B"),
];

/// A full set of search parameters.
///
/// All recognized parameters are always present (blank ones included), so the
/// endpoint sees the same shape of query whatever was overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(&'static str, String)>,
}
impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            params: PARAMETERS.iter().map(|(key, value)| (*key, value.to_string())).collect(),
        }
    }
}
impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, key: &str) -> Option<&mut String> {
        let key = key.trim();
        self.params
            .iter_mut()
            .find(|(known, _)| known.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }

    /// Overrides a recognized parameter (matched case-insensitively) and
    /// returns `true`; unrecognized keys are ignored and return `false`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.slot(key) {
            Some(slot) => {
                *slot = value.into();
                true
            },
            None => {
                tracing::debug!(key, "ignoring unrecognized query parameter");
                false
            },
        }
    }

    /// Like [`set`](Self::set), but an unrecognized key is an error.
    pub fn try_set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let slot = self.slot(key).ok_or_raise(|| ErrorKind::UnknownParameter(key.to_string()))?;
        *slot = value.into();
        Ok(())
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.trim();
        self.params
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Key/value pairs in sending order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.params.iter().map(|(key, value)| (*key, value.as_str())).collect()
    }
}
impl<K, V> Extend<(K, V)> for SearchQuery
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}
impl<K, V> FromIterator<(K, V)> for SearchQuery
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        query.extend(iter);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let query = SearchQuery::new();
        let pairs = query.pairs();
        assert_eq!(pairs.len(), 16);
        assert_eq!(pairs[0], ("Output", "W"));
        assert_eq!(pairs[15], ("Sort", "B"));
        assert_eq!(query.get("Inspection_Type"), Some("All"));
        assert_eq!(query.get("Fuzzy_Search"), Some("N"));
        assert_eq!(query.get("Zip_Code"), Some(""));
    }

    #[rstest]
    #[case("Zip_Code", true)]
    #[case("zip_code", true)]
    #[case(" Business_Name ", true)]
    #[case("Zip", false)]
    #[case("Definitely_Not_A_Key", false)]
    fn test_set(#[case] key: &str, #[case] recognized: bool) {
        let mut query = SearchQuery::new();
        assert_eq!(query.set(key, "value"), recognized);
        let changed = query.pairs().iter().filter(|(_, value)| *value == "value").count();
        assert_eq!(changed, usize::from(recognized));
        assert_eq!(query.pairs().len(), 16);
    }

    #[test]
    fn test_try_set_rejects_unknown() {
        let mut query = SearchQuery::new();
        assert!(query.try_set("City", "Seattle").is_ok());
        let err = query.try_set("Country", "US").unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnknownParameter(key) if key == "Country"));
        assert_eq!(query.get("City"), Some("Seattle"));
    }

    #[test]
    fn test_collect_ignores_unknown_keys() {
        let query: SearchQuery = [
            ("Inspection_Start", "2/1/2013"),
            ("Inspection_End", "2/1/2015"),
            ("Zip_Code", "98109"),
            ("Color", "blue"),
        ]
        .into_iter()
        .collect();
        let expected = SearchQuery::new()
            .with("Inspection_Start", "2/1/2013")
            .with("Inspection_End", "2/1/2015")
            .with("Zip_Code", "98109");
        assert_eq!(query, expected);
    }
}
