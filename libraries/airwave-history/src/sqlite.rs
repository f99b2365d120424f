//! `SQLite`-backed history store

use crate::recent;
use airwave_core::{HistoryRecord, PlayHistory, TrackSummary};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Persistence service backed by the `recent_plays` table
#[derive(Clone)]
pub struct SqliteHistory {
    pool: SqlitePool,
}

impl SqliteHistory {
    /// Create a store over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlayHistory for SqliteHistory {
    async fn record_play(&self, track: &TrackSummary) -> airwave_core::Result<HistoryRecord> {
        recent::record_play(&self.pool, track)
            .await
            .map_err(Into::into)
    }

    async fn list_recent(&self, limit: usize) -> airwave_core::Result<Vec<HistoryRecord>> {
        recent::list_recent(&self.pool, limit)
            .await
            .map_err(Into::into)
    }
}
