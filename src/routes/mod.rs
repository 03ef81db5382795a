// ABOUTME: Route module organization for the FitPlan HTTP endpoints
// ABOUTME: Health, chat, and agent roster routes plus the shared Not Found fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Route module for the FitPlan server
//!
//! Each domain module contains only route definitions and thin handlers
//! that delegate to the agent loop or the resource container.

use axum::http::StatusCode;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use fitplan_core::errors::ErrorEnvelope;
use serde_json::Map;

/// Agent roster routes
pub mod agents;
/// Chat routes for AI agents
pub mod chat;
/// Health check route
pub mod health;

pub use agents::AgentRoutes;
pub use chat::ChatRoutes;
pub use health::HealthRoutes;

/// Current UTC time as RFC 3339 with millisecond precision, e.g. `2025-01-01T00:00:00.000Z`
#[must_use]
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `404 {"error":"Not Found"}` for unknown paths and wrong methods
pub async fn not_found() -> (StatusCode, Json<ErrorEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope {
            error: "Not Found".to_owned(),
            details: Map::new(),
        }),
    )
}
