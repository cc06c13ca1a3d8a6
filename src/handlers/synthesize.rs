//! Article synthesis handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Article, SynthesisLevel};
use crate::startup::AppState;

/// Request to synthesize an article at a given depth.
///
/// Fields are optional at the wire level so missing ones produce the
/// gateway's own 400 payload instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub article: Option<Article>,
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    pub synthesis: String,
}

/// Build the prompt for the requested level and relay the model's reply.
pub async fn synthesize(
    State(state): State<AppState>,
    Json(payload): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, AppError> {
    let (article, level) = match (payload.article, payload.level) {
        (Some(article), Some(level)) => (article, level),
        _ => {
            return Err(AppError::BadRequest(
                "Article and level required".to_string(),
            ))
        }
    };

    let level = SynthesisLevel::parse(&level)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown synthesis level: {}", level)))?;

    let title = match article.title.as_deref() {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(AppError::BadRequest("Article title required".to_string())),
    };
    let description = article.description.as_deref().unwrap_or_default();

    let prompt = level.prompt(title, description);

    tracing::info!(level = ?level, title = %title, "synthesizing article");

    let synthesis = state.synthesis.synthesize(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "synthesis provider call failed");
        AppError::from(e)
    })?;

    Ok(Json(SynthesizeResponse { synthesis }))
}
