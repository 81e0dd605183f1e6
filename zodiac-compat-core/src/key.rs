//! Canonical keys for unordered sign pairs.

use serde::{Deserialize, Serialize};

use crate::sign::Sign;

/// Joins the two sorted member names of a [`CompatKey`].
pub const KEY_SEPARATOR: &str = "-";

/// Canonical identifier for an unordered pair of members, e.g. `"Ox-Rat"`.
///
/// Names are trimmed and sorted by byte order before joining, so
/// `CompatKey::new(a, b) == CompatKey::new(b, a)` always holds. Byte order
/// agrees with JavaScript's default `Array.prototype.sort` for ASCII names,
/// which is what the generated accessor uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatKey(String);

impl CompatKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (a, b) = (a.trim(), b.trim());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("{lo}{KEY_SEPARATOR}{hi}"))
    }

    pub fn from_signs(a: Sign, b: Sign) -> Self {
        Self::new(a.name(), b.name())
    }

    /// The two member names, in sorted order.
    ///
    /// Splits at the first separator, which is exact for sign names since
    /// none of them contain a hyphen.
    pub fn members(&self) -> (&str, &str) {
        self.0
            .split_once(KEY_SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompatKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "tests/key_tests.rs"]
mod tests;
