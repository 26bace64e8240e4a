//! Error handling module for the pasct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use pasc_lex::LexError;
use thiserror::Error;

/// Main error type for the pasct CLI application.
#[derive(Error, Debug)]
pub enum PasctError {
    /// Error when the configuration cannot be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when the scanner rejects the input.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PasctError.
pub type Result<T> = std::result::Result<T, PasctError>;
