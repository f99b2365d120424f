/// Play history API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use airwave_core::{HistoryRecord, TrackSummary};
use airwave_history::RETENTION_CAP;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

/// POST /api/history - Record a played track
pub async fn record_play(
    State(state): State<AppState>,
    Json(track): Json<TrackSummary>,
) -> Result<(StatusCode, Json<HistoryRecord>)> {
    if track.id.as_str().is_empty() || track.title.is_empty() {
        return Err(ServerError::BadRequest("Invalid track data".to_string()));
    }

    let record = state.history.record_play(&track).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

/// GET /api/history - Recently played tracks, newest first
pub async fn list_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<HistoryRecord>>> {
    let limit = params.limit.unwrap_or(RETENTION_CAP).min(RETENTION_CAP);
    let records = state.history.list_recent(limit).await?;
    Ok(Json(records))
}
