/// Errors that can occur while reading guide pages.
///
/// A page that simply does not exist is not an error; the sign is skipped
/// and listed in the report instead.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
