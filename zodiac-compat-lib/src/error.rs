use thiserror::Error;

use zodiac_compat_codegen::CodegenError;
use zodiac_compat_core::ArtifactError;
use zodiac_compat_extract::ExtractError;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("Generation failed: {0}")]
    Codegen(#[from] CodegenError),
}
