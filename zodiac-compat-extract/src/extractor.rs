use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use zodiac_compat_core::{CompatKey, CompatTable, Sign};

use crate::blocks::{ParsedBlock, parse_blocks};
use crate::error::ExtractError;

/// Where the per-sign pages live: `<source_root>/<slug>/<document_name>`.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub source_root: PathBuf,
    pub document_name: String,
}

impl DocumentLayout {
    pub fn new(source_root: impl Into<PathBuf>, document_name: impl Into<String>) -> Self {
        Self {
            source_root: source_root.into(),
            document_name: document_name.into(),
        }
    }

    pub fn document_path(&self, sign: Sign) -> PathBuf {
        self.source_root.join(sign.slug()).join(&self.document_name)
    }
}

/// The same pair key was produced by more than one block.
///
/// The later block's entry is the one kept in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub key: CompatKey,
    /// Page the replaced entry came from
    pub first_source: Sign,
    /// Page the surviving entry came from
    pub second_source: Sign,
    /// Whether both entries carried exactly the same text
    pub identical: bool,
}

/// Summary of an extraction run, for console output.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Signs whose page was found and scanned, in scan order
    pub processed: Vec<Sign>,
    /// Signs whose page does not exist
    pub skipped: Vec<Sign>,
    /// Blocks matched across all pages (before de-duplication)
    pub blocks: usize,
    /// Distinct keys in the resulting table
    pub entries: usize,
    pub collisions: Vec<Collision>,
    /// Keys with a member that is not an exact sign name, in scan order
    pub unreachable: Vec<CompatKey>,
}

impl ExtractReport {
    /// Collisions where the two pages disagree on the text.
    pub fn conflicting(&self) -> impl Iterator<Item = &Collision> {
        self.collisions.iter().filter(|c| !c.identical)
    }
}

/// Result of [`extract_table`].
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub table: CompatTable,
    pub report: ExtractReport,
}

/// Scan one page per sign, in the order given, and aggregate every block.
///
/// Later pages overwrite earlier ones on key collisions; each collision is
/// logged and recorded in the report. A missing page is skipped with a
/// warning, while any other read failure aborts the run.
pub fn extract_table(layout: &DocumentLayout, signs: &[Sign]) -> Result<Extraction, ExtractError> {
    let mut extraction = Extraction::default();
    let mut sources: HashMap<CompatKey, Sign> = HashMap::new();

    for &sign in signs {
        let path = layout.document_path(sign);
        let Some(text) = read_document(&path)? else {
            log::warn!("Skipping {sign}: {} not found", path.display());
            extraction.report.skipped.push(sign);
            continue;
        };

        log::info!("Processing {}...", sign.slug());
        let blocks = parse_blocks(&text);
        log::debug!("{}: {} block(s)", path.display(), blocks.len());

        for block in blocks {
            let key = block.key();
            let reachable = warn_unknown_members(&block, &path);
            if !reachable && !extraction.report.unreachable.contains(&key) {
                extraction.report.unreachable.push(key.clone());
            }
            if let Some(previous) = extraction.table.insert(key.clone(), block.entry.clone()) {
                let first_source = sources.get(&key).copied().unwrap_or(sign);
                let collision = Collision {
                    key: key.clone(),
                    first_source,
                    second_source: sign,
                    identical: previous == block.entry,
                };
                log_collision(&collision);
                extraction.report.collisions.push(collision);
            }
            sources.insert(key, sign);
            extraction.report.blocks += 1;
        }
        extraction.report.processed.push(sign);
    }

    extraction.report.entries = extraction.table.len();
    Ok(extraction)
}

/// Read a page, mapping "not found" to `None`.
fn read_document(path: &Path) -> Result<Option<String>, ExtractError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ExtractError::io(path.display().to_string(), e)),
    }
}

/// Warn about member names the typed accessor can never produce.
///
/// Returns `true` when both members are exact sign names.
fn warn_unknown_members(block: &ParsedBlock, path: &Path) -> bool {
    let mut reachable = true;
    for name in [&block.first, &block.second] {
        if Sign::from_name(name).is_some() {
            continue;
        }
        reachable = false;
        match name.parse::<Sign>() {
            Ok(sign) => log::warn!(
                "{}: '{}' in \"{}\" should be spelled '{}'; entry will not be reachable by sign lookup",
                path.display(),
                name,
                block.entry.heading,
                sign.name(),
            ),
            Err(_) => log::warn!(
                "{}: '{}' in \"{}\" is not a zodiac sign; entry will not be reachable by sign lookup",
                path.display(),
                name,
                block.entry.heading,
            ),
        }
    }
    reachable
}

fn log_collision(collision: &Collision) {
    if collision.identical {
        log::debug!(
            "{} appears on both the {} and {} pages (same text)",
            collision.key,
            collision.first_source.slug(),
            collision.second_source.slug(),
        );
    } else {
        log::warn!(
            "{} differs between the {} and {} pages; keeping the {} version",
            collision.key,
            collision.first_source.slug(),
            collision.second_source.slug(),
            collision.second_source.slug(),
        );
    }
}
