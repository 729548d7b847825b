//! Error handling for the Rain Tomorrow predictor
//!
//! Only artifact loading can take the process down, and only at startup;
//! everything after that surfaces as a per-request error or a warning.

use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid asset bundle: {0}")]
    InvalidAssets(String),

    // Prediction errors
    #[error("Feature schema mismatch: expected {expected} columns, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("Inference failed: {0}")]
    Inference(&'static str),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the application
pub type AppResult<T> = Result<T, AppError>;
