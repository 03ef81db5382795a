// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Environment-only configuration loaded once at process start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors
//! Configuration module for the FitPlan server
//!
//! - **Environment**: server, deployment, and LLM settings from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LlmConfig, LogLevel, ServerConfig};
