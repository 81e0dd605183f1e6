//! Grammar for a single compatibility block inside a page source.
//!
//! A block is a heading followed by two paragraphs:
//!
//! ```text
//! <h3 className="...">Rat × Ox — Steady Alliance</h3>
//! <p className="...">Grounded and dependable.</p>
//! <p>Rat's quick wit meets
//!    Ox's patience.</p>
//! ```
//!
//! Attributes on the tags are ignored, the member names and classification
//! are matched non-greedily, and the description may span lines and contain
//! inline markup (stripped afterwards).

use std::sync::LazyLock;

use regex::Regex;

use zodiac_compat_core::{CompatEntry, CompatKey};

static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)<h3[^>]*>\s*([^<]+?)\s*×\s*([^<]+?)\s*—\s*([^<]+?)\s*</h3>",
        r"\s*<p[^>]*>\s*([^<]+?)\s*</p>",
        r"\s*<p[^>]*>\s*(.+?)\s*</p>",
    ))
    .unwrap()
});

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// One matched block, with the raw pair names kept for keying and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub first: String,
    pub second: String,
    pub classification: String,
    pub entry: CompatEntry,
}

impl ParsedBlock {
    /// Canonical key for the pair named in the heading.
    pub fn key(&self) -> CompatKey {
        CompatKey::new(&self.first, &self.second)
    }
}

/// Find every compatibility block in `text`, in document order.
///
/// Fields that match the grammar but come out empty are passed through
/// unchanged.
pub fn parse_blocks(text: &str) -> Vec<ParsedBlock> {
    BLOCK_PATTERN
        .captures_iter(text)
        .map(|caps| {
            let field = |i: usize| caps.get(i).map_or("", |m| m.as_str()).trim();
            let (first, second, classification) = (field(1), field(2), field(3));
            ParsedBlock {
                first: first.to_string(),
                second: second.to_string(),
                classification: classification.to_string(),
                entry: CompatEntry {
                    heading: format!("{first} × {second} — {classification}"),
                    tagline: field(4).to_string(),
                    description: clean_description(field(5)),
                },
            }
        })
        .collect()
}

/// Strip inline tags and collapse every whitespace run to one space.
pub fn clean_description(raw: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(raw, "");
    collapse_whitespace(&stripped)
}

/// Collapse runs of whitespace (including newlines) to single spaces and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/blocks_tests.rs"]
mod tests;
