//! Recently played history queries
//!
//! The recency contract lives here: replaying a track replaces its old
//! row, and every insert trims the table back to [`RETENTION_CAP`] rows,
//! newest first.

use crate::error::Result;
use crate::RETENTION_CAP;
use airwave_core::{HistoryRecord, TrackId, TrackSummary};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

/// Record a play of `track`
///
/// Removes any existing row for the same track id, inserts a fresh row
/// stamped with the current time, and evicts rows beyond the retention
/// cap. Runs in a single transaction.
pub async fn record_play(pool: &SqlitePool, track: &TrackSummary) -> Result<HistoryRecord> {
    let played_at = Utc::now();
    let played_at_ms = played_at.timestamp_millis();

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM recent_plays WHERE track_id = ?")
        .bind(track.id.as_str())
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query(
        "INSERT INTO recent_plays
         (track_id, title, artist, artwork_url, duration_ms, permalink_url,
          playback_count, played_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(track.id.as_str())
    .bind(&track.title)
    .bind(&track.artist_name)
    .bind(&track.artwork_url)
    .bind(track.duration_ms as i64)
    .bind(&track.permalink_url)
    .bind(track.playback_count.map(|c| c as i64))
    .bind(played_at_ms)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "DELETE FROM recent_plays
         WHERE id NOT IN (
             SELECT id FROM recent_plays
             ORDER BY played_at DESC, id DESC
             LIMIT ?
         )",
    )
    .bind(RETENTION_CAP as i64)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(HistoryRecord::from_track(
        result.last_insert_rowid(),
        track,
        played_at,
    ))
}

/// List recent plays, newest first, truncated to `limit`
pub async fn list_recent(pool: &SqlitePool, limit: usize) -> Result<Vec<HistoryRecord>> {
    let rows = sqlx::query(
        "SELECT id, track_id, title, artist, artwork_url, duration_ms,
                permalink_url, playback_count, played_at
         FROM recent_plays
         ORDER BY played_at DESC, id DESC
         LIMIT ?",
    )
    .bind(limit as i64)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| HistoryRecord {
            id: row.get("id"),
            track_id: TrackId::new(row.get::<String, _>("track_id")),
            title: row.get("title"),
            artist: row.get("artist"),
            artwork_url: row.get("artwork_url"),
            duration_ms: row.get::<Option<i64>, _>("duration_ms").map(|v| v as u64),
            permalink_url: row.get("permalink_url"),
            playback_count: row
                .get::<Option<i64>, _>("playback_count")
                .map(|v| v as u64),
            played_at: DateTime::from_timestamp_millis(row.get("played_at")).unwrap_or_default(),
        })
        .collect())
}
