//! Axum route handler for AI fill.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::fill::fill_resume;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FillRequest {
    pub prompt: String,
}

/// POST /api/v1/fill
///
/// Replaces the session résumé with one generated from the prompt. A blank prompt
/// is ignored and the current résumé is returned. On failure the session keeps
/// its previous résumé.
pub async fn handle_fill(
    State(state): State<AppState>,
    Json(request): Json<FillRequest>,
) -> Result<Json<Resume>, AppError> {
    if request.prompt.trim().is_empty() {
        return Ok(Json(state.session.snapshot().await));
    }

    let _busy = state
        .session
        .fill_busy
        .try_acquire()
        .ok_or(AppError::Busy("AI generation"))?;

    match fill_resume(state.generator.as_ref(), &request.prompt).await? {
        Some(resume) => {
            state.session.replace(resume.clone()).await;
            Ok(Json(resume))
        }
        None => Ok(Json(state.session.snapshot().await)),
    }
}
