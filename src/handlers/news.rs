//! Handlers relaying news provider responses.
//!
//! Both endpoints share the relay policy: an "ok" payload passes through
//! verbatim, anything else becomes a 400 carrying the provider's message.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::NewsApiResponse;
use crate::startup::AppState;

// Fallbacks when the provider reports failure without a message.
const HEADLINES_FALLBACK: &str = "Failed to fetch news";
const SEARCH_FALLBACK: &str = "Failed to search news";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Fetch top headlines for a category.
///
/// The category is free-form; the provider decides whether it is valid.
pub async fn headlines(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<NewsApiResponse>, AppError> {
    tracing::info!(category = %category, "fetching headlines");

    let payload = state.news.top_headlines(&category).await.map_err(|e| {
        tracing::error!(error = %e, "news provider call failed");
        AppError::Upstream(e)
    })?;

    relay(payload, HEADLINES_FALLBACK)
}

/// Search articles by free-text query.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<NewsApiResponse>, AppError> {
    // Trim only decides presence; the query is forwarded as given.
    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return Err(AppError::BadRequest("Search query required".to_string())),
    };

    tracing::info!(query = %query, "searching articles");

    let payload = state.news.search_everything(&query).await.map_err(|e| {
        tracing::error!(error = %e, "news provider call failed");
        AppError::Upstream(e)
    })?;

    relay(payload, SEARCH_FALLBACK)
}

fn relay(payload: NewsApiResponse, fallback: &str) -> Result<Json<NewsApiResponse>, AppError> {
    if payload.is_ok() {
        Ok(Json(payload))
    } else {
        let message = payload.message.unwrap_or_else(|| fallback.to_string());
        tracing::warn!(error = %message, "news provider reported failure");
        Err(AppError::BadRequest(message))
    }
}
