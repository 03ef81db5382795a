// ABOUTME: Main library entry point for the FitPlan fitness planning server
// ABOUTME: Wires config, logging, LLM provider, agents, planning tools, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Server
//!
//! A fitness and nutrition planning service. The deterministic planners live
//! in `fitplan_intelligence`; this crate exposes them two ways:
//!
//! - **Tool-call surface**: [`tools::ToolRegistry`] runs a planner by id with
//!   JSON arguments. The chat agent uses it inside its tool-calling loop.
//! - **HTTP surface**: `GET /health`, `POST /api/chat`, `GET /api/agents`,
//!   with permissive CORS and flat JSON error envelopes.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fitplan_server::config::ServerConfig;
//! use fitplan_server::resources::ServerResources;
//! use fitplan_server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let (host, port) = (config.host.clone(), config.http_port);
//!     let resources = Arc::new(ServerResources::new(config)?);
//!     HttpServer::new(resources).run(&host, port).await
//! }
//! ```

/// Agent roster and tool-calling loop
pub mod agents;

/// Environment-based configuration
pub mod config;

/// LLM provider abstraction and the OpenAI-compatible client
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for CORS and request tracing
pub mod middleware;

/// Shared resource container
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server bootstrap
pub mod server;

/// Planning tools and the tool registry
pub mod tools;

pub use fitplan_core::errors::{AppError, AppResult, ErrorCode};
