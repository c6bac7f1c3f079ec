mod api;
mod app;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;
mod store;

use anyhow::Result;
use std::sync::Arc;

use domain::assistant::AssistantPrompts;
use services::{FarmingAssistant, GeminiClient, TextGenerator, WaterNeedEstimator};
use store::{InMemoryForum, InMemoryGuides, StaticMarkets, StaticPestReports};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        model = %settings.gemini_model,
        "Starting AgroAI backend"
    );

    let gemini = GeminiClient::new(
        &settings.gemini_base_url,
        &settings.gemini_api_key,
        &settings.gemini_model,
        settings.gemini_timeout_seconds,
    )?;

    // Check the model in the background; chat still answers with fallbacks if it is down
    tokio::spawn({
        let gemini = gemini.clone();
        async move {
            match gemini.health_check().await {
                Ok(()) => tracing::info!("Gemini model is reachable"),
                Err(e) => tracing::warn!(error = %e, "Gemini health check failed"),
            }
        }
    });

    let mut prompts = AssistantPrompts::default();
    if let Some(persona) = &settings.assistant_persona_prompt {
        prompts = prompts.with_persona(persona.clone());
    }
    let assistant = FarmingAssistant::new(Arc::new(gemini), prompts);

    let state = app::AppState::new(
        settings.clone(),
        WaterNeedEstimator::default(),
        assistant,
        Arc::new(InMemoryForum::seeded()),
        Arc::new(StaticMarkets::seeded()),
        Arc::new(StaticPestReports::seeded()),
        Arc::new(InMemoryGuides::seeded()),
    );

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
