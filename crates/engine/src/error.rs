use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single report run. `Display` is the exact line shown to the user.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error: File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error: Not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Error reading file: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::FileRead { path, .. }
            | Self::Metadata { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
