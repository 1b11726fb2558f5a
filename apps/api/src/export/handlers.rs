use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::export::{export_filename, ExportOptions};
use crate::render::render;
use crate::state::AppState;

/// POST /api/v1/export
///
/// Renders the current résumé and returns it as a PDF attachment.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let _busy = state
        .session
        .export_busy
        .try_acquire()
        .ok_or(AppError::Busy("Export"))?;

    let resume = state.session.snapshot().await;
    let surface = render(&resume);
    let filename = export_filename(&resume);

    let pdf = state
        .exporter
        .export(&surface, &ExportOptions::standard())
        .await?;

    info!("Exported {filename} ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{ascii}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
