//! Error types for starter-plugins

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying plugins
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] starter_fs::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
