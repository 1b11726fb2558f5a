pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers::handle_export;
use crate::fill::handlers::handle_fill;
use crate::render::handlers::handle_preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form editor
        .route(
            "/api/v1/resume",
            get(editor::handle_get_resume).put(editor::handle_replace_resume),
        )
        .route(
            "/api/v1/resume/personal",
            patch(editor::handle_set_personal_field),
        )
        .route("/api/v1/resume/template", put(editor::handle_set_template))
        .route("/api/v1/resume/skills", post(editor::handle_add_skill))
        .route(
            "/api/v1/resume/skills/:index",
            delete(editor::handle_remove_skill),
        )
        .route(
            "/api/v1/resume/certifications",
            post(editor::handle_add_certification),
        )
        .route(
            "/api/v1/resume/certifications/:index",
            delete(editor::handle_remove_certification),
        )
        .route("/api/v1/resume/:list", post(editor::handle_add_entry))
        .route(
            "/api/v1/resume/:list/:id",
            patch(editor::handle_update_entry).delete(editor::handle_remove_entry),
        )
        // Presets
        .route("/api/v1/samples", get(editor::handle_list_samples))
        .route("/api/v1/samples/:name", post(editor::handle_load_sample))
        // Preview, AI fill, export
        .route("/api/v1/preview", get(handle_preview))
        .route("/api/v1/fill", post(handle_fill))
        .route("/api/v1/export", post(handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::export::testing::RecordingExporter;
    use crate::fill::testing::StubGenerator;
    use crate::models::ids::SequentialIdGenerator;
    use crate::models::presets;
    use crate::models::resume::Resume;
    use crate::session::Session;

    fn test_state() -> AppState {
        AppState {
            session: Session::new(Resume::empty()),
            ids: Arc::new(SequentialIdGenerator::new("id")),
            generator: Arc::new(StubGenerator::ok(|| {
                Ok(presets::by_name("Executive").unwrap())
            })),
            exporter: Arc::new(RecordingExporter::default()),
        }
    }

    async fn send(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(state, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send_json(&test_state(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "proresume-api");
    }

    #[tokio::test]
    async fn test_jane_doe_editing_flow() {
        let state = test_state();

        send_json(
            &state,
            Method::PATCH,
            "/api/v1/resume/personal",
            Some(json!({ "field": "fullName", "value": "Jane Doe" })),
        )
        .await;

        let (status, body) = send_json(&state, Method::POST, "/api/v1/resume/experience", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "id-1");

        let (_, body) = send_json(
            &state,
            Method::PATCH,
            "/api/v1/resume/experience/id-1",
            Some(json!({ "field": "company", "value": "Acme" })),
        )
        .await;
        assert_eq!(body["experience"][0]["company"], "Acme");

        send_json(
            &state,
            Method::POST,
            "/api/v1/resume/skills",
            Some(json!({ "text": "  Rust  " })),
        )
        .await;

        let resume = state.session.snapshot().await;
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].end_date, "");
        assert_eq!(resume.skills, vec!["Rust"]);

        let (status, html) = send(&state, Method::GET, "/api/v1/preview", None).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(html).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Present"));
    }

    #[tokio::test]
    async fn test_remove_entry_and_skill() {
        let state = test_state();
        send_json(&state, Method::POST, "/api/v1/resume/projects", None).await;
        send_json(&state, Method::POST, "/api/v1/resume/skills", Some(json!({ "text": "Go" }))).await;

        let (status, body) = send_json(&state, Method::DELETE, "/api/v1/resume/projects/id-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projects"], json!([]));

        let (_, body) = send_json(&state, Method::DELETE, "/api/v1/resume/skills/5", None).await;
        assert_eq!(body["skills"], json!(["Go"]));
        let (_, body) = send_json(&state, Method::DELETE, "/api/v1/resume/skills/0", None).await;
        assert_eq!(body["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_list_is_not_found() {
        let state = test_state();
        let (status, body) = send_json(&state, Method::POST, "/api/v1/resume/hobbies", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_foreign_field_is_rejected() {
        let state = test_state();
        send_json(&state, Method::POST, "/api/v1/resume/education", None).await;
        let (status, body) = send_json(
            &state,
            Method::PATCH,
            "/api/v1/resume/education/id-1",
            Some(json!({ "field": "company", "value": "Acme" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_replace_rejects_duplicate_ids() {
        let state = test_state();
        let mut resume = presets::by_name("Software Engineer").unwrap();
        let dup = resume.experience[0].clone();
        resume.experience.push(dup);
        let (status, _) = send_json(
            &state,
            Method::PUT,
            "/api/v1/resume",
            Some(serde_json::to_value(&resume).unwrap()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(state.session.snapshot().await, Resume::empty());
    }

    #[tokio::test]
    async fn test_samples_list_and_load() {
        let state = test_state();
        let (_, body) = send_json(&state, Method::GET, "/api/v1/samples", None).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["name"], "Software Engineer");
        assert_eq!(body[0]["template"], "modern");

        let (status, body) =
            send_json(&state, Method::POST, "/api/v1/samples/Project%20Manager", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["template"], "classic");
        assert_eq!(state.session.snapshot().await.personal_info.full_name, "David Miller");

        let (status, _) = send_json(&state, Method::POST, "/api/v1/samples/Astronaut", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_template_switch() {
        let state = test_state();
        let (_, body) = send_json(
            &state,
            Method::PUT,
            "/api/v1/resume/template",
            Some(json!({ "template": "executive" })),
        )
        .await;
        assert_eq!(body["template"], "executive");
    }

    #[tokio::test]
    async fn test_preview_of_empty_resume_shows_placeholder() {
        let (status, html) = send(&test_state(), Method::GET, "/api/v1/preview", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(html).unwrap().contains("Your Name"));
    }

    #[tokio::test]
    async fn test_fill_replaces_resume() {
        let state = test_state();
        let (status, body) = send_json(
            &state,
            Method::POST,
            "/api/v1/fill",
            Some(json!({ "prompt": "COO with 20 years of experience" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["personalInfo"]["fullName"], "Michael Sterling");
        assert_eq!(state.session.snapshot().await.personal_info.full_name, "Michael Sterling");
        assert!(!state.session.fill_busy.is_busy());
    }

    #[tokio::test]
    async fn test_failed_fill_keeps_resume_and_clears_busy() {
        let mut state = test_state();
        let generator = Arc::new(StubGenerator::failing());
        state.generator = generator.clone();
        state.session.replace(presets::by_name("Graphic Designer").unwrap()).await;

        let (status, body) = send_json(
            &state,
            Method::POST,
            "/api/v1/fill",
            Some(json!({ "prompt": "designer" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "FILL_ERROR");
        assert_eq!(generator.calls(), 1);
        assert_eq!(
            state.session.snapshot().await,
            presets::by_name("Graphic Designer").unwrap()
        );
        assert!(!state.session.fill_busy.is_busy());
    }

    #[tokio::test]
    async fn test_blank_fill_prompt_is_ignored() {
        let mut state = test_state();
        let generator = Arc::new(StubGenerator::failing());
        state.generator = generator.clone();
        let (status, _) = send_json(&state, Method::POST, "/api/v1/fill", Some(json!({ "prompt": "  " }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_fill_while_busy_conflicts() {
        let state = test_state();
        let _held = state.session.fill_busy.try_acquire().unwrap();
        let (status, body) = send_json(&state, Method::POST, "/api/v1/fill", Some(json!({ "prompt": "x" }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "BUSY");
    }

    #[tokio::test]
    async fn test_export_returns_pdf_attachment() {
        let mut state = test_state();
        let exporter = Arc::new(RecordingExporter::default());
        state.exporter = exporter.clone();
        state.session.replace(presets::by_name("Software Engineer").unwrap()).await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/export")
            .body(Body::empty())
            .unwrap();
        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"Alex Rivera.pdf\""));

        let seen = exporter.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.template, crate::models::resume::Template::Modern);
        assert_eq!(seen[0].1.scale, 2.0);
        assert!(!state.session.export_busy.is_busy());
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let mut state = test_state();
        state.exporter = Arc::new(RecordingExporter {
            fail: true,
            ..Default::default()
        });
        let (status, body) = send_json(&state, Method::POST, "/api/v1/export", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EXPORT_ERROR");
        assert!(!state.session.export_busy.is_busy());
    }
}
