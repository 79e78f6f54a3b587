//! Per-call placeholder replacement sets.

use serde::ser::{
    Serialize,
    SerializeMap,
    Serializer,
};

/// Ordered, partial mapping from placeholder name to replacement value.
///
/// Entries keep insertion order. A `None` value stands for "no replacement for
/// this name" and leaves the matching token in the output untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    /// `(name, value)` pairs in insertion order, names unique.
    entries: Vec<(String, Option<String>)>,
}

impl Replacements {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Sets `name` to `value`, keeping the original position if `name` was
    /// already present.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Adds `name` with no value.
    #[must_use]
    pub fn unset(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(existing, _)| existing == name).and_then(|(_, v)| v.as_deref())
    }

    /// Iterates entries in insertion order, including unset ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object rendering used in diagnostics, e.g. `{"name":"Bob","n":null}`.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for Replacements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replacements = Self::new();
        for (name, value) in iter {
            replacements.insert(name, Some(value.into()));
        }
        replacements
    }
}

impl<K, V> Extend<(K, Option<V>)> for Replacements
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, Option<V>)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value.map(Into::into));
        }
    }
}
