use std::sync::Arc;

use crate::export::DocumentExporter;
use crate::fill::ResumeGenerator;
use crate::models::ids::IdGenerator;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub session: Session,
    /// Source of fresh list-entry ids. Default: UuidIdGenerator.
    pub ids: Arc<dyn IdGenerator>,
    /// Generative collaborator for AI fill. Default: GeminiResumeGenerator.
    pub generator: Arc<dyn ResumeGenerator>,
    /// PDF backend. Default: TypstExporter.
    pub exporter: Arc<dyn DocumentExporter>,
}
