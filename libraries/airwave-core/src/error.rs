/// Core error types for Airwave
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `AirwaveError`
pub type Result<T> = std::result::Result<T, AirwaveError>;

/// Core error type for Airwave
#[derive(Error, Debug)]
pub enum AirwaveError {
    /// Catalog lookup or stream resolution errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// History persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl AirwaveError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
