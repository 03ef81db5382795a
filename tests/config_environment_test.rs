// ABOUTME: Integration tests for loading configuration from the process environment
// ABOUTME: Mutates environment variables, so every test is serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use fitplan_server::config::{Environment, LogLevel, ServerConfig};
use fitplan_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const VARS: [&str; 11] = [
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_MODEL",
    "LLM_CONNECT_TIMEOUT_SECS",
    "LLM_REQUEST_TIMEOUT_SECS",
    "LOG_FORMAT",
    "SERVICE_NAME",
    "RUST_LOG",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.llm.api_key.is_none());
    assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
    assert_eq!(config.llm.request_timeout, Duration::from_secs(120));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("OPENAI_MODEL", "gpt-4o");
    env::set_var("LLM_CONNECT_TIMEOUT_SECS", "3");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 9090);
    assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(config.llm.connect_timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_timeout() {
    clear_env();
    env::set_var("LLM_REQUEST_TIMEOUT_SECS", "soon");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result
        .unwrap_err()
        .to_string()
        .contains("LLM_REQUEST_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_logging_config_follows_server_config() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "fitplan-test");

    let server = ServerConfig::from_env().unwrap();
    let config = LoggingConfig::for_server(&server);
    clear_env();

    assert_eq!(server.log_level, LogLevel::Debug);
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "fitplan-test");
    assert!(config.env_filter().to_string().contains("debug"));
}
