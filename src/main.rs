use clap::Parser;
use healthmate::api::{self, app_state::AppState};
use healthmate::config::cli::CliArgs;
use healthmate::config::loader::ConfigLoader;
use healthmate::error::Result;
use healthmate::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use healthmate::services::{create_history_store, create_random_source, create_responder};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();

    let mut config = ConfigLoader::load()?;
    cli.apply(&mut config);
    init_tracing(&config.logging);
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let random = create_random_source(config.responder.seed);
    if config.responder.seed.is_some() {
        info!("Responder using seeded random source");
    }
    let responder = create_responder(random);
    info!("Responder initialized");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(responder, create_history_store(), metrics.clone());
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
        app_state.history.clone(),
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
