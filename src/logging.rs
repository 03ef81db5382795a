// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Env-driven level and format, noise reduction filters, and domain log helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Structured logging built on `tracing-subscriber`.
//!
//! The level and deployment environment come from [`ServerConfig`];
//! `LOG_FORMAT` selects json, pretty, or compact output. Dependency noise
//! (hyper, reqwest, tower-http) is always capped.

use std::env;
use std::io;

use anyhow::{Context, Result};
use fitplan_core::constants::{env_config, service};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogLevel, ServerConfig};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level for this crate and everything not capped below
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service::NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Logging settings for `config`; output options come from the environment
    #[must_use]
    pub fn for_server(config: &ServerConfig) -> Self {
        Self {
            level: config.log_level,
            format: env::var(env_config::LOG_FORMAT)
                .map_or(LogFormat::Pretty, |v| LogFormat::from_str_or_default(&v)),
            include_location: config.environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var(env_config::SERVICE_NAME)
                .unwrap_or_else(|_| service::NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: config.environment,
        }
    }

    /// Build the filter: configured level plus fixed noise reduction
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::default()
            .add_directive(LevelFilter::from_level(self.level.to_tracing_level()).into());
        for directive in [
            "hyper=warn",
            "hyper_util=warn",
            "reqwest=warn",
            "tower_http=info",
        ] {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .try_init(),
        }
        .context("failed to install tracing subscriber")?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });
        info!("Logging configuration: {}", summary);
    }
}

/// Initialize logging for a loaded server configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_for_server(config: &ServerConfig) -> Result<()> {
    LoggingConfig::for_server(config).init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a planner tool invocation
    pub fn log_tool_call(tool_name: &str, success: bool, duration_ms: u64) {
        info!(
            tool.name = %tool_name,
            tool.success = %success,
            tool.duration_ms = %duration_ms,
            "Tool call"
        );
    }

    /// Log one completed or failed agent run
    pub fn log_agent_run(agent: &str, iterations: usize, success: bool, duration_ms: u64) {
        if success {
            info!(
                agent.name = %agent,
                agent.iterations = %iterations,
                agent.duration_ms = %duration_ms,
                "Agent run completed"
            );
        } else {
            warn!(
                agent.name = %agent,
                agent.iterations = %iterations,
                agent.duration_ms = %duration_ms,
                "Agent run failed"
            );
        }
    }

    /// Log an upstream LLM request
    pub fn log_llm_request(model: &str, messages: usize, tools: usize) {
        info!(
            llm.model = %model,
            llm.messages = %messages,
            llm.tools = %tools,
            "LLM request"
        );
    }
}
