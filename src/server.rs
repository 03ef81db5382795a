// ABOUTME: HTTP server bootstrap: router assembly, middleware stack, bind, and graceful shutdown
// ABOUTME: The router is also used directly by the integration tests via tower's oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # HTTP Server
//!
//! Middleware order, outermost first: request id generation, tracing span,
//! request id propagation, `Access-Control-Allow-Origin`, OPTIONS short-circuit.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{info, warn};

use crate::middleware::{
    allow_any_origin, preflight, propagate_request_id, set_request_id, trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::{not_found, AgentRoutes, ChatRoutes, HealthRoutes};

/// Assemble every route behind the shared middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(ChatRoutes::routes(Arc::clone(&resources)))
        .merge(AgentRoutes::routes(resources))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id())
                .layer(trace_layer())
                .layer(propagate_request_id())
                .layer(allow_any_origin())
                .layer(axum::middleware::from_fn(preflight)),
        )
}

/// HTTP server owning the shared resources
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server around already-built resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind `host:port` and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self, host: &str, port: u16) -> Result<()> {
        let addr = format!("{host}:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
        self.run_on(listener).await
    }

    /// Serve on an already-bound listener until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails
    pub async fn run_on(self, listener: TcpListener) -> Result<()> {
        let local_addr: SocketAddr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!(
            "FitPlan server listening on http://{local_addr} with agents: {:?}",
            self.resources.agents.names()
        );

        axum::serve(listener, build_router(self.resources))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
