// ABOUTME: Agent roster route handler
// ABOUTME: Lists registered agent keys and their count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use fitplan_core::constants::routes;
use serde::Serialize;

use super::not_found;
use crate::resources::ServerResources;

/// Body of `GET /api/agents`
#[derive(Debug, Serialize)]
pub struct AgentListResponse {
    /// Registered agent keys
    pub agents: Vec<String>,
    /// Number of agents
    pub count: usize,
}

/// Agent roster routes
pub struct AgentRoutes;

impl AgentRoutes {
    /// Create the agent listing route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::AGENTS,
                get(Self::handle_list_agents).fallback(not_found),
            )
            .with_state(resources)
    }

    async fn handle_list_agents(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<AgentListResponse> {
        let agents = resources.agents.names();
        Json(AgentListResponse {
            count: agents.len(),
            agents,
        })
    }
}
