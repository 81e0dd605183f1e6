use thiserror::Error;

use zodiac_compat_lib::{PipelineError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file or override problem
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Extraction or generation failed
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
