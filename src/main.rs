//! OralScan Gateway Server
//!
//! Run with: cargo run --bin oralscan
//!
//! # Configuration
//!
//! Read from `--config`, or the first of
//! `~/.config/oralscan/config.toml`, `/etc/oralscan/config.toml`,
//! `./config.toml`. `ORALSCAN_*` environment variables override the file;
//! command-line flags override both. `RUST_LOG` overrides the log level.

use anyhow::Context;
use clap::Parser;
use oralscan::api::{serve, AppState};
use oralscan::config::Config;
use oralscan::logging::init_tracing;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oralscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OralScan gateway: serves the screening UI and forwards to the predictor and chatbot")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the compiled UI
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, config_path) =
        Config::resolve(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = Some(dir);
    }

    init_tracing(&config.logging);

    tracing::info!("Starting OralScan gateway v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("No config file found, using defaults and environment"),
    }
    tracing::info!("Predictor: {}", config.endpoints.predictor_url);
    tracing::info!("Chatbot: {}", config.endpoints.chat_url);

    let state = AppState::from_config(&config).context("Failed to build upstream clients")?;

    // Upstreams may come up after the gateway, so only warn here
    let (predictor, chatbot) = tokio::join!(
        state.predictor.health_check(),
        state.chatbot.health_check()
    );
    match predictor {
        Ok(()) => tracing::info!("Predictor connection verified"),
        Err(e) => tracing::warn!("Predictor not available: {} (screening will fail)", e),
    }
    match chatbot {
        Ok(()) => tracing::info!("Chatbot connection verified"),
        Err(e) => tracing::warn!("Chatbot not available: {} (chat will fail)", e),
    }

    serve(state).await?;

    tracing::info!("OralScan gateway stopped");
    Ok(())
}
