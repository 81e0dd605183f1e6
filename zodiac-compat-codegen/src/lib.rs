//! Renders the compatibility table as a source module for the web app.

pub mod error;
pub mod escape;
pub mod typescript;

pub use error::CodegenError;
pub use escape::ts_string_literal;
pub use typescript::TypeScriptTarget;

use std::path::{Path, PathBuf};

use zodiac_compat_core::util::write_atomic;
use zodiac_compat_core::{CompatTable, read_artifact};

/// A language the lookup table can be emitted in.
pub trait ModuleTarget {
    fn name(&self) -> &'static str;

    /// Render the complete module text. Must be deterministic for a given table.
    fn render(&self, table: &CompatTable) -> String;
}

/// Write rendered module text to `path`, replacing any previous version.
pub fn write_module(path: &Path, contents: &str) -> Result<(), CodegenError> {
    write_atomic(path, contents.as_bytes())
        .map_err(|e| CodegenError::io(path.display().to_string(), e))
}

/// Read the artifact at `artifact_path`, render it with `target`, and write
/// the result to `module_path`.
///
/// The artifact is required: if it is missing nothing is written.
pub fn generate_module(
    artifact_path: &Path,
    module_path: &Path,
    target: &dyn ModuleTarget,
) -> Result<PathBuf, CodegenError> {
    let table = read_artifact(artifact_path)?;
    log::debug!(
        "Loaded {} entries from {}",
        table.len(),
        artifact_path.display()
    );
    let contents = target.render(&table);
    write_module(module_path, &contents)?;
    log::debug!("Wrote {} module ({} bytes)", target.name(), contents.len());
    Ok(module_path.to_path_buf())
}
