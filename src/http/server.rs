//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Freeze the deployment identity into shared state
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, HeaderValue};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::track_requests;
use crate::http::request::RequestIdLayer;
use crate::skew::DeploymentIdentity;

/// Region reported when the platform supplies none.
const DEFAULT_REGION: &str = "local";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide deployment identity, immutable after startup.
    pub identity: Arc<DeploymentIdentity>,

    /// Region this instance serves from.
    pub region: String,

    /// App-scope response headers inherited by page handlers.
    pub base_headers: HeaderMap,
}

/// HTTP server for the demo service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let identity = Arc::new(DeploymentIdentity::new(
            config.deployment.skew_protection_enabled,
            config.deployment.deployment_id.clone(),
        ));
        let region = config
            .deployment
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let mut base_headers = HeaderMap::new();
        base_headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));

        let state = AppState {
            identity,
            region,
            base_headers,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/regional-demo", get(handlers::regional_demo))
            .route("/api/skew-test", get(handlers::skew_test))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(axum::middleware::from_fn(track_requests))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Stops on Ctrl-C or when the shutdown receiver fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
