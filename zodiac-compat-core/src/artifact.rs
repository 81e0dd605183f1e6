//! The intermediate JSON artifact shared by the extractor and the generator.
//!
//! Format: a single JSON object mapping canonical key to
//! `{ "heading", "tagline", "description" }`, pretty-printed with two-space
//! indentation, keys sorted, UTF-8 with non-ASCII characters written as-is
//! (`×` and `—` stay literal so diffs stay readable).

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ArtifactError;
use crate::table::CompatTable;
use crate::util::write_atomic;

/// Serialize a table to the artifact text format.
pub fn to_artifact_string(table: &CompatTable) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(table)?;
    json.push('\n');
    Ok(json)
}

/// Write the table to `path`, replacing any previous artifact.
pub fn write_artifact(path: &Path, table: &CompatTable) -> Result<(), ArtifactError> {
    let json =
        to_artifact_string(table).map_err(|e| ArtifactError::json(path.display().to_string(), e))?;
    write_atomic(path, json.as_bytes())
        .map_err(|e| ArtifactError::io(path.display().to_string(), e))
}

/// Load a table previously written by [`write_artifact`].
///
/// A missing file is reported as [`ArtifactError::Missing`] so callers can
/// tell "extractor never ran" apart from other I/O failures.
pub fn read_artifact(path: &Path) -> Result<CompatTable, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ArtifactError::missing(path.display().to_string())
        } else {
            ArtifactError::io(path.display().to_string(), e)
        }
    })?;
    serde_json::from_str(&contents).map_err(|e| ArtifactError::json(path.display().to_string(), e))
}

#[cfg(test)]
#[path = "tests/artifact_tests.rs"]
mod tests;
