//! Loader errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Program file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid literal at line {line}: {token:?} (expected 8 binary digits)")]
    InvalidLiteral { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;

impl LoaderError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LoaderError::InvalidLiteral { .. } => 65,
            LoaderError::NotFound { .. } => 66,
            LoaderError::Io(_) => 69,
        }
    }
}
