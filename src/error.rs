// src/error.rs
use line_report_engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Error: No file path provided")]
    Input(#[source] Option<std::io::Error>),

    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(_) | Self::Input(_) | Self::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
