//! Common error types for the cricket statistics service

use thiserror::Error;

/// Common result type for cricket operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the workspace
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
