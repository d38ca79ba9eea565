use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
}

#[instrument(skip(state))]
pub async fn search_grants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.q.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Query string cannot be empty".to_string(),
        ));
    }

    let result = state.query_service.query(&params.q).await?;

    Ok(Json(result))
}
