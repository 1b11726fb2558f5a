//! AI Fill — turns a free-text description into a complete `Resume`.
//!
//! The structural shape is enforced twice: server-side by the response schema,
//! and locally by strict deserialization plus `Resume::check_integrity`. Any
//! failure is a single opaque `FillError`; the caller keeps its previous résumé.

pub mod handlers;
pub mod prompts;
pub mod schema;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::fill::prompts::FILL_PROMPT_TEMPLATE;
use crate::fill::schema::resume_schema;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{IntegrityError, Resume};

#[derive(Debug, Error)]
pub enum FillError {
    #[error("generative request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("generated resume is malformed: {0}")]
    Integrity(#[from] IntegrityError),
}

/// The generative collaborator. Carried in `AppState` as `Arc<dyn ResumeGenerator>`.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, description: &str) -> Result<Resume, FillError>;
}

/// Gemini-backed generator with the résumé schema enforced server-side.
pub struct GeminiResumeGenerator {
    llm: LlmClient,
}

impl GeminiResumeGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeGenerator for GeminiResumeGenerator {
    async fn generate(&self, description: &str) -> Result<Resume, FillError> {
        let prompt = build_fill_prompt(description);
        let resume: Resume = self.llm.call_json(&prompt, &resume_schema()).await?;
        Ok(resume)
    }
}

fn build_fill_prompt(description: &str) -> String {
    FILL_PROMPT_TEMPLATE
        .replace("{description}", description.trim())
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
}

/// Runs one fill. Returns `Ok(None)` without calling the generator when the
/// description is blank.
pub async fn fill_resume(
    generator: &dyn ResumeGenerator,
    description: &str,
) -> Result<Option<Resume>, FillError> {
    if description.trim().is_empty() {
        return Ok(None);
    }

    let resume = generator.generate(description).await?;
    resume.check_integrity()?;

    info!(
        "AI fill produced resume: template={}, experience={}, education={}, projects={}",
        resume.template.as_str(),
        resume.experience.len(),
        resume.education.len(),
        resume.projects.len()
    );

    Ok(Some(resume))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Returns a fixed result and counts invocations.
    pub struct StubGenerator {
        pub result: fn() -> Result<Resume, FillError>,
        pub calls: AtomicUsize,
    }

    impl StubGenerator {
        pub fn ok(result: fn() -> Result<Resume, FillError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self::ok(|| {
                Err(FillError::Llm(LlmError::Api {
                    status: 503,
                    message: "unavailable".into(),
                }))
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResumeGenerator for StubGenerator {
        async fn generate(&self, _description: &str) -> Result<Resume, FillError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }
}
