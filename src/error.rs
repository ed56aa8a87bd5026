use std::io;

use thiserror::Error;

/// Error type for running the application.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Terminal or file IO failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The log subscriber could not be installed.
    #[error("failed to set up logging: {0}")]
    Logging(String),
    /// The final result could not be encoded.
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}
