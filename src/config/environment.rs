// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, port, deployment mode, log level, and LLM connection settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Environment-based configuration.
//!
//! Every setting has a default, so the server starts with an empty
//! environment. A missing `OPENAI_API_KEY` is not a startup error: the chat
//! endpoint reports it as an upstream failure instead.

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use fitplan_core::constants::{env_config, llm, ports};
use serde::{Deserialize, Serialize};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Connection settings for the OpenAI-compatible LLM endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Bearer credential; `None` disables chat
    pub api_key: Option<String>,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Chat model id
    pub model: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: llm::DEFAULT_BASE_URL.to_owned(),
            model: llm::DEFAULT_MODEL.to_owned(),
            connect_timeout: Duration::from_secs(llm::DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(llm::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Default log level
    pub log_level: LogLevel,
    /// LLM endpoint settings
    pub llm: LlmConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            log_level: LogLevel::Info,
            llm: LlmConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let http_port = parse_or(&lookup, env_config::HTTP_PORT, defaults.http_port)?;
        let connect_secs = parse_or(
            &lookup,
            env_config::LLM_CONNECT_TIMEOUT_SECS,
            llm::DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;
        let request_secs = parse_or(
            &lookup,
            env_config::LLM_REQUEST_TIMEOUT_SECS,
            llm::DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host: var_or(env_config::HOST, &defaults.host),
            http_port,
            environment: Environment::from_str_or_default(&var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&var_or(env_config::RUST_LOG, "info")),
            llm: LlmConfig {
                api_key: lookup(env_config::OPENAI_API_KEY).filter(|key| !key.trim().is_empty()),
                base_url: var_or(env_config::OPENAI_BASE_URL, llm::DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                model: var_or(env_config::OPENAI_MODEL, llm::DEFAULT_MODEL),
                connect_timeout: Duration::from_secs(connect_secs),
                request_timeout: Duration::from_secs(request_secs),
            },
        })
    }

    /// One-line summary safe for logs (never includes the API key)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FitPlan Server Configuration: host={} http_port={} environment={} log_level={} \
             llm_model={} llm_base_url={} llm_key_configured={}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.llm.model,
            self.llm.base_url,
            self.llm.api_key.is_some()
        )
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_from_empty_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.http_port, 8081);
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HTTP_PORT", "9000"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1/"),
            ("ENVIRONMENT", "prod"),
        ]))
        .unwrap();

        assert_eq!(config.http_port, 9000);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.base_url, "http://localhost:1234/v1");
        assert!(config.environment.is_production());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "  ")])).unwrap();
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_summary_and_debug_hide_api_key() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret")])).unwrap();
        assert!(!config.summary().contains("sk-secret"));
        assert!(!format!("{config:?}").contains("sk-secret"));
    }

    #[test]
    fn test_level_and_environment_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
