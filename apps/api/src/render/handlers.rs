use axum::{extract::State, response::Html};

use crate::render::render;
use crate::state::AppState;

/// GET /api/v1/preview
///
/// The live preview of the current résumé under its active template.
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    let resume = state.session.snapshot().await;
    Html(render(&resume).to_html())
}
