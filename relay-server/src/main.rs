//! Binary crate for the weather relay server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Loading configuration and wiring it into the provider
//! - Serving the HTTP relay surface

use clap::Parser;
use relay_core::{Config, OpenWeatherProvider};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-relay", version, about = "Weather relay server")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// TCP port the listener binds to.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_server=info,relay_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load(&cli.config);
    let provider = OpenWeatherProvider::new(config)?;

    let app = server::router(Arc::new(provider));

    // A bind or serve failure is fatal; per-request failures never are.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
