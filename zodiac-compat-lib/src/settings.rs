//! Pipeline paths and where they come from.
//!
//! Every path is resolved through one priority chain:
//!
//! 1. command-line overrides
//! 2. a TOML settings file (`--config <path>`, or `zodiac-compat.toml` in
//!    the working directory when present)
//! 3. built-in defaults, relative to the web app's project root
//!
//! Relative paths are resolved against the process working directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file picked up from the working directory when no `--config` is given.
pub const SETTINGS_FILE_NAME: &str = "zodiac-compat.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    NotFound(String),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Could not render settings: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Inputs and outputs of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSettings {
    /// Directory holding one sub-directory per sign
    pub source_root: PathBuf,
    /// File name of the page inside each sign directory
    pub document_name: String,
    /// Intermediate JSON written by `extract`, read by `generate`
    pub artifact_path: PathBuf,
    /// TypeScript module written by `generate`
    pub module_path: PathBuf,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("app/astrology/guide/next"),
            document_name: "page.tsx".to_string(),
            artifact_path: PathBuf::from("output/chinese_compat_full.json"),
            module_path: PathBuf::from("lib/astrology/chineseConnectionBlurbs.ts"),
        }
    }
}

impl PipelineSettings {
    /// Load settings from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SettingsError::NotFound(path.display().to_string())
            } else {
                SettingsError::Io {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;
        toml::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Pretty-printed TOML, suitable for saving as a settings file.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        if let Some(ref p) = overrides.source_root {
            self.source_root = p.clone();
        }
        if let Some(ref name) = overrides.document_name {
            self.document_name = name.clone();
        }
        if let Some(ref p) = overrides.artifact_path {
            self.artifact_path = p.clone();
        }
        if let Some(ref p) = overrides.module_path {
            self.module_path = p.clone();
        }
        self
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Explicit settings file; it is an error for it not to exist
    pub config: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub document_name: Option<String>,
    pub artifact_path: Option<PathBuf>,
    pub module_path: Option<PathBuf>,
}

/// Resolve the effective settings for a run started in `working_dir`.
pub fn resolve_settings(
    overrides: &SettingsOverrides,
    working_dir: &Path,
) -> Result<PipelineSettings, SettingsError> {
    let base = match overrides.config {
        Some(ref path) => {
            log::debug!("Loading settings from {}", path.display());
            PipelineSettings::load(path)?
        }
        None => {
            let local = working_dir.join(SETTINGS_FILE_NAME);
            if local.is_file() {
                log::debug!("Loading settings from {}", local.display());
                PipelineSettings::load(&local)?
            } else {
                PipelineSettings::default()
            }
        }
    };
    Ok(base.with_overrides(overrides))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
