use std::collections::BTreeMap;
use std::collections::btree_map::{IntoIter, Iter};

use super::Inspection;

/// Inspection records keyed by restaurant name.
///
/// Inserting a name that is already present replaces the earlier record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Results {
    inner: BTreeMap<String, Inspection>,
}
impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `inspection` under `name`, returning the record it replaced.
    pub fn insert(&mut self, name: impl Into<String>, inspection: Inspection) -> Option<Inspection> {
        self.inner.insert(name.into(), inspection)
    }

    pub fn get(&self, name: &str) -> Option<&Inspection> {
        self.inner.get(name)
    }

    pub fn iter(&self) -> Iter<'_, String, Inspection> {
        self.inner.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
impl IntoIterator for Results {
    type Item = (String, Inspection);
    type IntoIter = IntoIter<String, Inspection>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
impl<'a> IntoIterator for &'a Results {
    type Item = (&'a String, &'a Inspection);
    type IntoIter = Iter<'a, String, Inspection>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Results {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.inner)
    }
}
