use thiserror::Error;

/// Custom error types for footnote-tip
#[derive(Debug, Error)]
pub enum FootnoteError {
    #[error("No footnote link matches '{0}'")]
    LinkNotFound(String),

    #[error("Invalid geometry '{value}': expected {expected}")]
    InvalidGeometry { value: String, expected: &'static str },

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
