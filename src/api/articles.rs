//! New-article webhook endpoint.

use axum::{body::Bytes, extract::State, http::StatusCode};

use super::{decode, ApiResult};
use crate::errors::AppError;
use crate::models::NewArticleEvent;
use crate::AppState;

/// POST /new_article - Look up the users subscribed to the article's topic.
pub async fn new_article(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusCode> {
    tracing::info!("Received new_article webhook");

    let event: NewArticleEvent = decode(&body)?;

    tracing::info!("Querying user profiles subscribed to {}", event.topic);

    let result = state.view.query_by_key(&event.topic).await?;
    let rows = serde_json::to_string(&result.rows)
        .map_err(|e| AppError::Internal(format!("Failed to render view rows: {}", e)))?;

    tracing::info!("Result from the user_topics query: {}", rows);

    Ok(StatusCode::OK)
}
