//! Application-wide error types using thiserror.

use eris_common::ErisError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Configuration or catalog error.
    #[error("Configuration error: {0}")]
    Config(#[from] ErisError),

    /// I/O error, typically from binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the site application.
pub type SiteResult<T> = Result<T, SiteError>;
