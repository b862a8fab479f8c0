//! Query endpoint handler

use axum::{extract::State, Json};
use tracing::info;

use super::state::AppState;
use super::types::{ApiError, QueryRequest, QueryResponse};

/// POST /query
pub async fn process_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    info!("Processing query request");

    let answer = state.query_service.answer(&request.question).await?;

    Ok(Json(QueryResponse { answer }))
}
