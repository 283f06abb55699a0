//! Error handling module for chunk-remover

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for the outer shell: configuration, cut lists and I/O
#[derive(Error, Debug)]
pub enum RemoverError {
    /// Validation or execution failure from the core
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: PathBuf },

    /// Output would overwrite the input while it is being read
    #[error("Output file is the input file: {path}")]
    OutputIsInput { path: PathBuf },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Cut list file could not be read or contains an invalid entry
    #[error("Cut list {path}: {message}")]
    CutList { path: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RemoverError {
    pub fn config(message: impl Into<String>) -> Self {
        RemoverError::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for chunk-remover operations
pub type RemoverResult<T> = std::result::Result<T, RemoverError>;
