//! In-memory history store
//!
//! Same semantics as the `SQLite` store without a database: used by test
//! suites and as a fallback when no database is configured.

use crate::RETENTION_CAP;
use airwave_core::{HistoryRecord, PlayHistory, TrackSummary};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Bounded, de-duplicated in-memory play history
///
/// Most recent record sits at the front.
pub struct MemoryHistory {
    inner: Mutex<Inner>,
    max_records: usize,
}

struct Inner {
    records: VecDeque<HistoryRecord>,
    next_id: i64,
}

impl MemoryHistory {
    /// Create a store retaining at most `max_records` entries
    pub fn new(max_records: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: VecDeque::with_capacity(max_records),
                next_id: 1,
            }),
            max_records,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.records.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(RETENTION_CAP)
    }
}

#[async_trait]
impl PlayHistory for MemoryHistory {
    async fn record_play(&self, track: &TrackSummary) -> airwave_core::Result<HistoryRecord> {
        let mut inner = self.inner.lock().await;

        // Replace any existing record for this track id
        inner.records.retain(|r| r.track_id != track.id);

        let id = inner.next_id;
        inner.next_id += 1;
        let record = HistoryRecord::from_track(id, track, Utc::now());
        inner.records.push_front(record.clone());

        let max_records = self.max_records;
        inner.records.truncate(max_records);

        Ok(record)
    }

    async fn list_recent(&self, limit: usize) -> airwave_core::Result<Vec<HistoryRecord>> {
        let inner = self.inner.lock().await;
        Ok(inner.records.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> TrackSummary {
        TrackSummary::new(id, format!("Track {id}"), "Test Artist")
    }

    #[tokio::test]
    async fn records_newest_first() {
        let history = MemoryHistory::default();
        history.record_play(&track("1")).await.unwrap();
        history.record_play(&track("2")).await.unwrap();
        history.record_play(&track("3")).await.unwrap();

        let recent = history.list_recent(20).await.unwrap();
        let ids: Vec<_> = recent.iter().map(|r| r.track_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[tokio::test]
    async fn replay_moves_to_head_without_changing_count() {
        let history = MemoryHistory::default();
        history.record_play(&track("1")).await.unwrap();
        history.record_play(&track("2")).await.unwrap();
        let first = history.list_recent(20).await.unwrap();
        let old_played_at = first
            .iter()
            .find(|r| r.track_id.as_str() == "1")
            .unwrap()
            .played_at;

        history.record_play(&track("1")).await.unwrap();

        let recent = history.list_recent(20).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].track_id.as_str(), "1");
        assert!(recent[0].played_at >= old_played_at);
    }

    #[tokio::test]
    async fn cap_evicts_least_recently_played() {
        let history = MemoryHistory::default();
        for i in 0..21 {
            history.record_play(&track(&i.to_string())).await.unwrap();
        }

        let recent = history.list_recent(100).await.unwrap();
        assert_eq!(recent.len(), 20);
        // Track "0" was played first and falls off the tail
        assert!(recent.iter().all(|r| r.track_id.as_str() != "0"));
        assert_eq!(recent[0].track_id.as_str(), "20");
    }

    #[tokio::test]
    async fn list_recent_truncates_to_limit() {
        let history = MemoryHistory::default();
        for i in 0..10 {
            history.record_play(&track(&i.to_string())).await.unwrap();
        }

        let recent = history.list_recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].track_id.as_str(), "9");
    }
}
