use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for lexi
#[derive(Debug, Error)]
pub enum LexiError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
