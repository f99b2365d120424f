/// Catalog proxy API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use airwave_core::{TrackId, TrackSummary};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/catalog/search - Search the track catalog
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TrackSummary>>> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Search query is required".to_string()))?;
    let limit = params.limit.unwrap_or(20).min(50);

    let tracks = state.catalog.search(&query, limit).await?;
    Ok(Json(tracks))
}

/// GET /api/catalog/tracks/{id} - Fetch a single track
pub async fn get_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackSummary>> {
    let track = state.catalog.track(&TrackId::new(id)).await?;
    Ok(Json(track))
}

#[derive(Debug, Serialize)]
pub struct StreamUrlResponse {
    pub url: String,
}

/// GET /api/catalog/stream/{id} - Resolve a playable stream URL
pub async fn stream(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StreamUrlResponse>> {
    let track = state.catalog.track(&TrackId::new(id)).await?;
    let url = state.catalog.stream_url(&track).await?;
    Ok(Json(StreamUrlResponse { url }))
}
