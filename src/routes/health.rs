// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness, a timestamp, and the agent roster on any method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Health check route for service monitoring

use std::sync::Arc;

use axum::extract::State;
use axum::routing::any;
use axum::{Json, Router};
use fitplan_core::constants::{routes, service};
use serde::Serialize;

use super::timestamp;
use crate::resources::ServerResources;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: &'static str,
    /// RFC 3339 UTC time of the response
    pub timestamp: String,
    /// Service banner
    pub message: &'static str,
    /// Registered agent keys
    pub agents: Vec<String>,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, any(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok",
            timestamp: timestamp(),
            message: service::HEALTH_MESSAGE,
            agents: resources.agents.names(),
        })
    }
}
