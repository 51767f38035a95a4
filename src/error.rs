//! Error types for printcost

use thiserror::Error;

/// printcost error types
#[derive(Error, Debug)]
pub enum Error {
    /// Mesh is missing or carries inconsistent geometry attributes
    #[error("Mesh format error: {0}")]
    MeshFormat(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File load error
    #[error("File load error: {0}")]
    FileLoad(String),

    /// File save error
    #[error("File save error: {0}")]
    FileSave(String),
}

/// Result type alias for printcost operations
pub type Result<T> = std::result::Result<T, Error>;
