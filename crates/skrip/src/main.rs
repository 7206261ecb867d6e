//! Skrip binary.
//!
//! Loads configuration and the API key, then serves the studio until
//! interrupted. A missing key stops the process before anything binds.

use anyhow::Context;
use clap::Parser;
use skrip::cli::Cli;
use skrip::telemetry::init_logging;
use skrip::{ApiKey, ContentGenerator, GeminiClient, SkripConfig, StudioService, create_router};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv().ok();

    init_logging(cli.verbose, cli.json_logs);
    if let Some(path) = dotenv {
        info!(path = %path.display(), "Loaded .env");
    }

    let mut config = SkripConfig::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply_overrides(&mut config);

    let api_key = ApiKey::from_env().inspect_err(|e| {
        error!(error = %e, "No API key; set GEMINI_API_KEY");
    })?;

    let generator = GeminiClient::from_config(api_key, &config);
    info!(
        provider = generator.provider_name(),
        model = generator.model_name(),
        image_model = generator.image_model_name(),
        "Generator ready"
    );

    let app = create_router(StudioService::new(Arc::new(generator)));
    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(address = %address, "Studio listening on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    info!("Studio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
