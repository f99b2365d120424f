//! Error types for the catalog client.

use airwave_core::{AirwaveError, TrackId};
use thiserror::Error;

/// Errors that can occur when talking to the catalog provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned an error response
    #[error("Catalog error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Track does not exist upstream
    #[error("Track not found: {0}")]
    NotFound(TrackId),

    /// Track has no embedded stream URL and the provider returned none
    #[error("No stream URL available for track: {0}")]
    MissingStreamUrl(TrackId),

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a provider response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Provider is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),
}

impl From<CatalogError> for AirwaveError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AirwaveError::TrackNotFound(id),
            CatalogError::Unreachable(msg) => AirwaveError::Network(msg),
            other => AirwaveError::Catalog(other.to_string()),
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
