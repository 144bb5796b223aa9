//! Key/value metadata read from a document header.

use std::collections::HashMap;

/// Header metadata of a single document.
///
/// Keys are case-sensitive and unique; both keys and values are stored
/// trimmed. Built fresh for every document and only read by field
/// extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, String>,
}

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, replacing any previous one for the same key.
    ///
    /// Empty keys (after trimming) are ignored.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return;
        }
        self.entries
            .insert(key.to_string(), value.as_ref().trim().to_string());
    }

    /// Concatenate `value` onto the existing value for `key`, with no separator.
    ///
    /// Behaves like [`insert`](Self::insert) when the key is absent.
    pub fn append(&mut self, key: &str, value: &str) {
        match self.entries.get_mut(key) {
            Some(existing) => existing.push_str(value.trim()),
            None => self.insert(key, value),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}
