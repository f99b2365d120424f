//! Airwave core types
//!
//! Shared domain types and collaborator traits for the Airwave music
//! player:
//!
//! - [`TrackId`]: opaque track key (the upstream catalog emits numeric or
//!   string ids; both normalize to this type at the ingress boundary)
//! - [`TrackSummary`]: catalog track metadata
//! - [`HistoryRecord`]: a durable "recently played" entry
//! - [`TrackCatalog`] / [`PlayHistory`]: the external collaborators the
//!   playback session is wired to
//!
//! This crate has no I/O of its own; concrete catalog and persistence
//! implementations live in `airwave-catalog` and `airwave-history`.

mod error;
pub mod traits;
pub mod types;

pub use error::{AirwaveError, Result};
pub use traits::{PlayHistory, TrackCatalog};
pub use types::{HistoryRecord, TrackId, TrackSummary};
