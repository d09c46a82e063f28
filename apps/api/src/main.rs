mod config;
mod errors;
mod llm_client;
mod projects;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::projects::generator::LlmProjectGenerator;
use crate::routes::build_router;
use crate::skills::extractor::SkillExtractor;
use crate::skills::vocabulary::Vocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillForge API v{}", env!("CARGO_PKG_VERSION"));

    // Compile the vocabulary matchers once; they are shared read-only afterwards
    let skill_extractor = SkillExtractor::new(Vocabulary::devops())
        .context("Failed to compile skill vocabulary matchers")?;
    info!(
        "Skill extractor ready ({} vocabulary terms)",
        skill_extractor.vocabulary().len()
    );

    // Initialize LLM client
    if config.openai_api_key.is_none() {
        error!("OPENAI_API_KEY is not set; project generation requests will fail");
    }
    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url)
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        skill_extractor: Arc::new(skill_extractor),
        project_generator: Arc::new(LlmProjectGenerator(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
