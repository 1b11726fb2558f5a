mod config;
mod editor;
mod errors;
mod export;
mod fill;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::typst::TypstExporter;
use crate::fill::GeminiResumeGenerator;
use crate::llm_client::LlmClient;
use crate::models::ids::UuidIdGenerator;
use crate::models::resume::Resume;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ProResume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client and the AI fill generator on top of it
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let generator = Arc::new(GeminiResumeGenerator::new(llm));

    // Initialize PDF exporter with the configured fonts
    let exporter = Arc::new(TypstExporter::from_font_dir(Path::new(&config.font_dir))?);

    // Build app state; the session starts from the empty résumé
    let state = AppState {
        session: Session::new(Resume::empty()),
        ids: Arc::new(UuidIdGenerator),
        generator,
        exporter,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
