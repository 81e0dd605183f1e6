use thiserror::Error;

/// Errors that can occur reading or writing the intermediate JSON artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact does not exist (the extractor has not been run)
    #[error("Artifact not found: {path} (run the extractor first)")]
    Missing { path: String },

    /// I/O error while reading or writing the artifact
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The artifact exists but is not a valid compatibility table
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl ArtifactError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::Missing { path: path.into() }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
