//! HTTP client for the Airwave track catalog provider.
//!
//! Wraps a SoundCloud-style catalog API: track search, track lookup by
//! id, and stream-URL resolution. Wire responses are normalized into
//! [`airwave_core::TrackSummary`] at this boundary, including ids that
//! arrive as JSON numbers or strings.
//!
//! The client implements [`airwave_core::TrackCatalog`], which is the
//! seam the playback session and the server consume.

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use types::CatalogConfig;
