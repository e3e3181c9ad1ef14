// ABOUTME: HTTP server assembly and lifecycle for the energy calculator API
// ABOUTME: Builds the Axum router with middleware layers and serves it until a shutdown signal
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! HTTP server
//!
//! [`build_router`] is used by the binary and by integration tests alike, so
//! tests exercise exactly the middleware stack that production runs.

use crate::config::{environment::ServerConfig, nutrition::EnergyConfig};
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{BmrRoutes, HealthRoutes};
use anyhow::Result;
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Build the application router with every route and middleware layer
#[must_use]
pub fn build_router(config: &ServerConfig, energy_config: Arc<EnergyConfig>) -> Router {
    Router::new()
        .merge(BmrRoutes::routes(energy_config))
        .merge(HealthRoutes::routes())
        .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(config))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Bind and serve until `SIGINT` / `SIGTERM`
///
/// # Errors
///
/// Returns an error if the calculator configuration is invalid, the address
/// cannot be bound, or the server fails while running
pub async fn run(config: ServerConfig) -> Result<()> {
    let energy_config = EnergyConfig::global();
    energy_config.validate()?;

    let app = build_router(&config, Arc::new(energy_config.clone()));
    let listener = TcpListener::bind(config.bind_address()).await?;

    info!("Server listening on http://{}", listener.local_addr()?);
    display_available_endpoints(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    info!("   Energy Calculator: POST {base}/api/bmr");
    info!("   Health Check:      GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("=== End of Endpoint List ===");
}

/// Resolve when the process receives Ctrl-C or, on Unix, `SIGTERM`
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => warn!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
