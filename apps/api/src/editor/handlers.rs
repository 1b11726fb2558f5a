use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor;
use crate::errors::AppError;
use crate::models::presets;
use crate::models::resume::{EntryField, ListKind, PersonalField, Resume, Template};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PersonalFieldRequest {
    pub field: PersonalField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EntryFieldRequest {
    pub field: EntryField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub template: Template,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    pub id: String,
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct SampleSummary {
    pub name: &'static str,
    pub template: Template,
}

fn parse_list(name: &str) -> Result<ListKind, AppError> {
    ListKind::parse(name).ok_or_else(|| AppError::NotFound(format!("No list named '{name}'")))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<Resume> {
    Json(state.session.snapshot().await)
}

/// PUT /api/v1/resume
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(resume): Json<Resume>,
) -> Result<Json<Resume>, AppError> {
    resume.check_integrity()?;
    state.session.replace(resume.clone()).await;
    Ok(Json(resume))
}

/// PATCH /api/v1/resume/personal
pub async fn handle_set_personal_field(
    State(state): State<AppState>,
    Json(req): Json<PersonalFieldRequest>,
) -> Json<Resume> {
    let resume = state
        .session
        .apply(|r| editor::set_personal_field(r, req.field, &req.value))
        .await;
    Json(resume)
}

/// PUT /api/v1/resume/template
pub async fn handle_set_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateRequest>,
) -> Json<Resume> {
    let resume = state
        .session
        .apply(|r| editor::set_template(r, req.template))
        .await;
    Json(resume)
}

/// POST /api/v1/resume/:list
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path(list): Path<String>,
) -> Result<Json<AddEntryResponse>, AppError> {
    let kind = parse_list(&list)?;
    let mut new_id = String::new();
    let resume = state
        .session
        .apply(|r| {
            let (next, id) = editor::add_list_entry(r, kind, state.ids.as_ref());
            new_id = id;
            next
        })
        .await;
    Ok(Json(AddEntryResponse { id: new_id, resume }))
}

/// PATCH /api/v1/resume/:list/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, String)>,
    Json(req): Json<EntryFieldRequest>,
) -> Result<Json<Resume>, AppError> {
    let kind = parse_list(&list)?;
    if !kind.accepts(req.field) {
        return Err(AppError::Validation(format!(
            "{} entries have no field {:?}",
            kind.as_str(),
            req.field
        )));
    }
    let resume = state
        .session
        .apply(|r| editor::update_list_entry_field(r, kind, &id, req.field, &req.value))
        .await;
    Ok(Json(resume))
}

/// DELETE /api/v1/resume/:list/:id
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((list, id)): Path<(String, String)>,
) -> Result<Json<Resume>, AppError> {
    let kind = parse_list(&list)?;
    let resume = state
        .session
        .apply(|r| editor::remove_list_entry(r, kind, &id))
        .await;
    Ok(Json(resume))
}

/// POST /api/v1/resume/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<Resume> {
    Json(state.session.apply(|r| editor::add_skill(r, &req.text)).await)
}

/// DELETE /api/v1/resume/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<Resume> {
    Json(state.session.apply(|r| editor::remove_skill(r, index)).await)
}

/// POST /api/v1/resume/certifications
pub async fn handle_add_certification(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<Resume> {
    Json(
        state
            .session
            .apply(|r| editor::add_certification(r, &req.text))
            .await,
    )
}

/// DELETE /api/v1/resume/certifications/:index
pub async fn handle_remove_certification(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<Resume> {
    Json(
        state
            .session
            .apply(|r| editor::remove_certification(r, index))
            .await,
    )
}

/// GET /api/v1/samples
pub async fn handle_list_samples() -> Json<Vec<SampleSummary>> {
    let samples = presets::names()
        .iter()
        .copied()
        .filter_map(|name| {
            presets::by_name(name).map(|r| SampleSummary {
                name,
                template: r.template,
            })
        })
        .collect();
    Json(samples)
}

/// POST /api/v1/samples/:name
///
/// Replaces the session résumé with a fresh copy of the named preset.
pub async fn handle_load_sample(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = presets::by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("No sample named '{name}'")))?;
    state.session.replace(resume.clone()).await;
    Ok(Json(resume))
}
