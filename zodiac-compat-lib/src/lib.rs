//! Pipeline orchestration shared by the command-line frontend.
//!
//! Re-exports the pieces a frontend needs so it only depends on this crate.

pub mod error;
pub mod pipeline;
pub mod settings;

pub use error::PipelineError;
pub use pipeline::{run_all, run_extract, run_generate};
pub use settings::{PipelineSettings, SettingsError, SettingsOverrides, resolve_settings};

pub use zodiac_compat_core::{CompatEntry, CompatKey, CompatTable, Sign};
pub use zodiac_compat_extract::{Collision, DocumentLayout, ExtractReport};
