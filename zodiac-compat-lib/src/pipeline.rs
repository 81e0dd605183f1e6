use std::path::PathBuf;

use zodiac_compat_codegen::{TypeScriptTarget, generate_module};
use zodiac_compat_core::{Sign, write_artifact};
use zodiac_compat_extract::{DocumentLayout, ExtractReport, extract_table};

use crate::error::PipelineError;
use crate::settings::PipelineSettings;

/// Scan every sign's page and write the aggregate table to the artifact path.
///
/// The artifact is replaced on every run, even when no blocks were found.
pub fn run_extract(settings: &PipelineSettings) -> Result<ExtractReport, PipelineError> {
    let layout = DocumentLayout::new(&settings.source_root, &settings.document_name);
    log::debug!(
        "Scanning {} for {}",
        layout.source_root.display(),
        layout.document_name
    );
    let extraction = extract_table(&layout, Sign::all())?;
    write_artifact(&settings.artifact_path, &extraction.table)?;
    Ok(extraction.report)
}

/// Render the artifact as a TypeScript module; returns the path written.
pub fn run_generate(settings: &PipelineSettings) -> Result<PathBuf, PipelineError> {
    let target = TypeScriptTarget::new();
    Ok(generate_module(
        &settings.artifact_path,
        &settings.module_path,
        &target,
    )?)
}

/// Extract, then generate.
pub fn run_all(settings: &PipelineSettings) -> Result<(ExtractReport, PathBuf), PipelineError> {
    let report = run_extract(settings)?;
    let module = run_generate(settings)?;
    Ok((report, module))
}
