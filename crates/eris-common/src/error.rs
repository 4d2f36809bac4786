//! Workspace-wide error type.

/// Common result type for the workspace.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Workspace-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum ErisError {
    /// Site configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command catalog error.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ErisError {
    /// Creates a configuration error from any displayable value.
    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    /// Creates a catalog error from any displayable value.
    pub fn catalog(msg: impl std::fmt::Display) -> Self {
        Self::Catalog(msg.to_string())
    }
}
