//! Export — turns a rendered `Surface` into a downloadable document.
//!
//! The exporter sees only the surface and the fixed export options, never the
//! résumé itself. The Typst backend in `typst` is the default; `AppState` holds
//! an `Arc<dyn DocumentExporter>` so it can be swapped.

pub mod handlers;
pub mod style;
pub mod typst;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::models::resume::Resume;
use crate::render::surface::Surface;

/// Scale requested from the rasterizer. Balances file size against sharpness.
pub const EXPORT_SCALE: f32 = 2.0;
pub const FALLBACK_FILENAME: &str = "resume";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document compilation failed: {0}")]
    Compilation(String),

    #[error("export worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSize {
    A4,
    #[allow(dead_code)]
    Letter,
}

impl PageSize {
    /// Paper name as Typst spells it.
    pub fn typst_name(&self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::Letter => "us-letter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExportOptions {
    pub scale: f32,
    pub page: PageSize,
    pub orientation: Orientation,
}

impl ExportOptions {
    /// The only options the service exports with: 2x, A4, portrait.
    pub fn standard() -> Self {
        Self {
            scale: EXPORT_SCALE,
            page: PageSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(&self, surface: &Surface, options: &ExportOptions) -> Result<Vec<u8>, ExportError>;
}

/// `"{fullName}.pdf"`, or `resume.pdf` when the name is blank.
///
/// Path separators, quotes and control characters are dropped so the name is
/// safe both on disk and inside a `Content-Disposition` header. Leading and
/// trailing dots go too, so no stem is hidden or made only of dots.
pub fn export_filename(resume: &Resume) -> String {
    let cleaned: String = resume
        .personal_info
        .full_name
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|'))
        .collect();
    let stem = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    let stem = if stem.is_empty() { FALLBACK_FILENAME } else { stem };
    format!("{stem}.pdf")
}
