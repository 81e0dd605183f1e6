use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::CompatKey;
use crate::sign::Sign;

/// One symmetric compatibility description between two signs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatEntry {
    /// Display title, e.g. "Rat × Ox — Steady Alliance"
    pub heading: String,
    /// Short phrase shown under the heading
    pub tagline: String,
    /// Longer free text, markup stripped and whitespace collapsed
    pub description: String,
}

impl CompatEntry {
    pub fn new(
        heading: impl Into<String>,
        tagline: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            tagline: tagline.into(),
            description: description.into(),
        }
    }
}

/// Mapping from canonical pair key to entry.
///
/// Backed by a `BTreeMap` so iteration, serialization and code generation all
/// see keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatTable {
    entries: BTreeMap<CompatKey, CompatEntry>,
}

impl CompatTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any existing one for the same key.
    ///
    /// Returns the displaced entry so callers can report collisions.
    pub fn insert(&mut self, key: CompatKey, entry: CompatEntry) -> Option<CompatEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &CompatKey) -> Option<&CompatEntry> {
        self.entries.get(key)
    }

    /// Symmetric lookup: `lookup(a, b)` and `lookup(b, a)` return the same entry.
    pub fn lookup(&self, a: Sign, b: Sign) -> Option<&CompatEntry> {
        self.get(&CompatKey::from_signs(a, b))
    }

    pub fn contains_key(&self, key: &CompatKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompatKey, &CompatEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CompatKey> {
        self.entries.keys()
    }
}

impl FromIterator<(CompatKey, CompatEntry)> for CompatTable {
    fn from_iter<I: IntoIterator<Item = (CompatKey, CompatEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CompatTable {
    type Item = (&'a CompatKey, &'a CompatEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, CompatKey, CompatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
