// ABOUTME: Chat route handler that answers one message with a named agent
// ABOUTME: Validates the body, resolves the agent, runs the tool loop, and shapes error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Chat route for AI agents
//!
//! `POST /api/chat` takes `{message, agentName?}` and returns
//! `{response, agent, timestamp}`. The body is parsed by hand so malformed
//! JSON gets the same flat error envelope as every other failure.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use fitplan_core::constants::{agents, routes};
use fitplan_core::errors::{AppError, AppResult, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::{not_found, timestamp};
use crate::agents::run_agent;
use crate::resources::ServerResources;

// ============================================================================
// Request and Response Types
// ============================================================================

/// Validated chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInput {
    /// User message, never empty
    pub message: String,
    /// Agent key
    pub agent_name: String,
}

impl ChatInput {
    /// Parse and validate a raw request body
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed JSON and `MissingRequiredField`
    /// when `message` is absent, empty, or not a string.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            AppError::invalid_input("Invalid JSON body").with_detail("message", e.to_string())
        })?;

        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .ok_or_else(|| AppError::missing_field("Message is required"))?;

        let agent_name = value
            .get("agentName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(agents::DEFAULT_AGENT);

        Ok(Self {
            message: message.to_owned(),
            agent_name: agent_name.to_owned(),
        })
    }
}

/// Body of a successful chat reply
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Agent's final text
    pub response: String,
    /// Agent key that answered
    pub agent: String,
    /// RFC 3339 UTC time of the response
    pub timestamp: String,
}

// ============================================================================
// Routes
// ============================================================================

/// Chat routes
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::CHAT, post(Self::handle_chat).fallback(not_found))
            .with_state(resources)
    }

    async fn handle_chat(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let input = ChatInput::from_body(&body)?;

        let agent = resources.agents.get(&input.agent_name).ok_or_else(|| {
            AppError::not_found(format!("Agent '{}'", input.agent_name))
                .with_detail("availableAgents", resources.agents.names())
        })?;

        info!(agent = %agent.key, "Handling chat message");
        let reply = run_agent(agent, &input.message, resources.llm.as_ref(), &resources.tools)
            .await
            .map_err(|e| agent_failure(&input.agent_name, &e))?;

        Ok(Json(ChatResponse {
            response: reply.text,
            agent: input.agent_name,
            timestamp: timestamp(),
        })
        .into_response())
    }
}

/// Wrap any agent-run failure in the `{error, message, agent}` envelope
fn agent_failure(agent_name: &str, error: &AppError) -> AppError {
    AppError::new(ErrorCode::ExternalServiceError, "Agent execution failed")
        .with_detail("message", error.message.clone())
        .with_detail("agent", agent_name)
}
