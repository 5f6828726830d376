use crate::consts::BUSINESS_NAME_LABEL;

/// Labelled values from a listing's metadata table.
///
/// Each label maps to one or more values (a wrapped address spans several
/// rows). Labels are unique and kept in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, Vec<String>)>,
}
impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` to the values under `label`, creating the entry on
    /// first use.
    pub fn push(&mut self, label: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((label.to_string(), vec![value])),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, values)| values.as_slice())
    }

    /// The first value recorded under `label`.
    pub fn first(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn business_name(&self) -> Option<&str> {
        self.first(BUSINESS_NAME_LABEL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl<L, V> FromIterator<(L, V)> for Metadata
where
    L: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (label, value) in iter {
            metadata.push(label.as_ref(), value);
        }
        metadata
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Metadata {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_groups_by_label_in_first_seen_order() {
        let metadata: Metadata = [
            ("Business Name", "Cafe X"),
            ("Address", "123 Main St"),
            ("Business Name", "second"),
            ("Address", "Seattle, WA 98109"),
        ]
        .into_iter()
        .collect();
        let labels: Vec<_> = metadata.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Business Name", "Address"]);
        assert_eq!(metadata.get("Address").unwrap(), ["123 Main St", "Seattle, WA 98109"]);
        assert_eq!(metadata.business_name(), Some("Cafe X"));
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn test_missing_label() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.get("Phone"), None);
        assert_eq!(metadata.business_name(), None);
    }
}
