//! Error types for the wp-app service layer.

use std::path::PathBuf;

use wp_core::WpError;

/// Application error type shared by the CLI and any other front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read graph file: {path}")]
    GraphFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write graph file: {path}")]
    GraphFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse graph file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize graph definition for {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    #[error("Graph definition invalid: {0}")]
    Validation(String),

    #[error("Graph error: {0}")]
    Graph(#[from] WpError),

    #[error("Coloring is not proper: {0}")]
    Conflict(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wp-app operations.
pub type AppResult<T> = Result<T, AppError>;
