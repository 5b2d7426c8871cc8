//! Error types for Libris

use thiserror::Error;

/// Main application error type
///
/// `NotFound` and `NotAvailable` are reported outcomes, not failures: the
/// menu matches on them and prints a message, then the session continues.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not available: {0}")]
    NotAvailable(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
