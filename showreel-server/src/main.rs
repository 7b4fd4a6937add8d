//! # Showreel Server
//!
//! Serves the catalog save endpoint.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use showreel_server::{
    AppState,
    infra::config::{Config, ConfigLoad, ConfigLoader},
    routes,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "showreel-server")]
#[command(about = "JSON save endpoint for the Showreel catalog")]
struct Cli {
    /// Path to a TOML configuration file (must exist when given)
    #[arg(short, long, env = "SHOWREEL_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file to load before reading the environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SHOWREEL_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SHOWREEL_HOST")]
    host: Option<String>,

    /// JSON document overwritten by each save (overrides config)
    #[arg(long, env = "SHOWREEL_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Comma-separated allowed origins, `*` for any (overrides config)
    #[arg(long, env = "SHOWREEL_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(&cli)?;
    let state = AppState::new(config);

    if state
        .store()
        .ensure_seeded()
        .context("failed to prepare data file")?
    {
        info!(path = %state.store().path().display(), "seeded empty catalog");
    }

    let addr = state.config().bind_address();
    let router = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "showreel server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("showreel server stopped");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host.clone() {
        config.server.host = host;
    }
    if let Some(data_file) = cli.data_file.clone() {
        config.storage.data_file = data_file;
    }
    if let Some(origins) = cli.cors_origins.clone() {
        config.cors.allowed_origins = origins;
    }

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "loaded configuration file");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    info!(
        data_file = %config.storage.data_file.display(),
        any_origin = config.cors.allows_any_origin(),
        "storage configuration in effect"
    );

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
