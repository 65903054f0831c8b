//! srw-gw (Recognition Gateway) - Speech recognition upload service
//!
//! Serves the single-page upload client and the speech recognition
//! endpoint. Runs in one of two deployment modes: simulated (fabricated
//! transcription results) or proxied (uploads forwarded to an external
//! prediction service).

use anyhow::Result;
use clap::Parser;
use srw_common::config::{ConfigOverrides, GatewayConfig};
use srw_gw::recognizer::Recognizer;
use srw_gw::{build_router, AppState};
use tracing::info;

/// Command-line overrides (highest priority configuration tier)
#[derive(Debug, Parser)]
#[command(name = "srw-gw", about = "SRW Recognition Gateway", version)]
struct Args {
    /// Listen address, e.g. 127.0.0.1:5730
    #[arg(long)]
    listen_addr: Option<String>,

    /// Recognition mode: simulated or proxied
    #[arg(long)]
    mode: Option<String>,

    /// Base URL of the upstream prediction service (proxied mode only)
    #[arg(long)]
    upstream_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting SRW Recognition Gateway (srw-gw) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let overrides = ConfigOverrides {
        listen_addr: args.listen_addr,
        mode: args.mode,
        upstream_base_url: args.upstream_base_url,
    };

    let config = GatewayConfig::resolve(&overrides)?;
    info!("Recognition mode: {}", config.mode);
    if let Some(base_url) = &config.upstream_base_url {
        info!("Upstream prediction service: {}", base_url);
    }

    let recognizer = Recognizer::from_config(&config)?;
    let state = AppState::new(recognizer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("srw-gw listening on http://{}", config.listen_addr);
    info!("Health check: http://{}/health", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
