// SPDX-License-Identifier: MIT

//! TitanFit API Server
//!
//! Coach/client fitness tracking: roster management, food/weight/measurement
//! logging, workout assignment, and Gemini-backed food recognition and plan
//! generation.

use std::sync::Arc;

use titanfit::{
    config::Config,
    db::Store,
    services::{CatalogService, GeminiClient},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting TitanFit API");

    // Open the durable store and seed it on first run
    let store = Store::open(&config.db_path).expect("Failed to open database file");
    let seeded = store.initialize().expect("Failed to initialize database");
    if seeded {
        tracing::info!(path = %config.db_path.display(), "Seeded database");
    }

    // Static food/exercise catalogs
    let catalog = CatalogService::builtin();
    tracing::info!(
        foods = catalog.foods().len(),
        exercises = catalog.exercises().len(),
        "Catalogs loaded"
    );

    // Gemini client for AI food analysis and plan generation
    let gemini = GeminiClient::new(config.gemini_base_url.clone(), config.gemini_api_key.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        catalog,
        gemini,
    });

    let app = titanfit::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("titanfit=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
