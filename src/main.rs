//! Application-authenticating gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                   GATEWAY                    │
//!                      │                                              │
//!     Client Request   │  ┌─────────┐   ┌────────────┐   ┌─────────┐  │
//!     ─────────────────┼─▶│  http   │──▶│  modifier  │──▶│  proxy  │──┼──▶ Upstream
//!                      │  │ server  │   │   chain    │   │ handler │  │
//!                      │  └─────────┘   └─────┬──────┘   └─────────┘  │
//!                      │                      │                       │
//!                      │                      ▼                       │
//!                      │              ┌──────────────┐                │
//!                      │              │     auth     │                │
//!                      │              │ (credential  │                │
//!                      │              │    table)    │                │
//!                      │              └──────────────┘                │
//!                      │                                              │
//!                      │  config · observability · lifecycle         │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use app_auth_gateway::config::{load_config, GatewayConfig};
use app_auth_gateway::lifecycle::{self, signals, Shutdown};
use app_auth_gateway::modifier::ModifierRegistry;
use app_auth_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "app-auth-gateway")]
#[command(about = "Reverse proxy that authenticates applications by bearer credential", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "app-auth-gateway starting");
    if cli.config.is_none() {
        tracing::warn!("No configuration file given, running with defaults and no modifiers");
    }

    let registry = ModifierRegistry::with_builtins();
    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    lifecycle::start(config, &registry, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
