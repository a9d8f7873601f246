//! Edge Deployment Demo Service
//!
//! A small web service built with Tokio and Axum that demonstrates two
//! edge-deployment features:
//!
//! - **Skew protection**: responses are tagged with an `x-deployment-id`
//!   header so clients can detect version skew during rolling deploys.
//! - **Regional demo**: a server-rendered page localized from geolocation
//!   headers injected by the hosting platform's edge network.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌───────────────────────────────────────────────┐
//!                   │                 EDGE DEMO                      │
//!                   │                                                │
//!   Client Request  │  ┌─────────┐    ┌──────────┐    ┌──────────┐  │
//!   ────────────────┼─▶│  http   │───▶│ handlers │───▶│   geo    │  │
//!                   │  │ server  │    │          │    │  lookup  │  │
//!                   │  └─────────┘    └────┬─────┘    └──────────┘  │
//!                   │                      │                        │
//!                   │                      ▼                        │
//!   Client Response │               ┌──────────────┐                │
//!   ◀───────────────┼───────────────│  skew header │                │
//!                   │               │   augmenter  │                │
//!                   │               └──────────────┘                │
//!                   │                                                │
//!                   │  ┌──────────────────────────────────────────┐ │
//!                   │  │          Cross-Cutting Concerns           │ │
//!                   │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                   │  │  │ config │ │observability│ │lifecycle │ │ │
//!                   │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                   │  └──────────────────────────────────────────┘ │
//!                   └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod geo;
pub mod http;
pub mod skew;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{apply_env_overrides, load_config, AppConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: optional TOML file path as first argument,
    // platform environment variables win over the file.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };
    let config = apply_env_overrides(config);

    init_tracing(&config.observability.log_level);

    tracing::info!("edge-demo v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        skew_protection_enabled = config.deployment.skew_protection_enabled,
        deployment_id = ?config.deployment.deployment_id,
        region = ?config.deployment.region,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => crate::observability::metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
