// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted in-memory LLM provider and router construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitplan_server`
//!
//! The scripted provider replays a fixed sequence of completions and records
//! every request it receives, so chat tests can assert on the exact messages
//! the agent loop sent without any network access.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use axum::Router;
use fitplan_core::errors::AppError;
use fitplan_server::config::ServerConfig;
use fitplan_server::llm::{
    ChatRequest, ChatResponseWithTools, FunctionCall, LlmProvider, Tool,
};
use fitplan_server::resources::ServerResources;
use fitplan_server::server::build_router;
use serde_json::Value;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Scripted LLM provider
// ============================================================================

/// One scripted completion
pub type ScriptedReply = Result<ChatResponseWithTools, AppError>;

/// LLM provider that replays canned replies in order
pub struct ScriptedLlmProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: Mutex<Vec<(ChatRequest, Vec<Tool>)>>,
}

impl ScriptedLlmProvider {
    /// Provider replaying `replies`; once exhausted it answers with empty text
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always answers with `text`
    pub fn answering(text: &str) -> Self {
        Self::new(vec![Ok(text_reply(text))])
    }

    /// Provider that requests `call` forever
    pub fn looping(call: FunctionCall, times: usize) -> Self {
        Self::new(
            (0..times)
                .map(|_| Ok(tool_call_reply(vec![call.clone()], None)))
                .collect(),
        )
    }

    /// Requests received so far, with the tools offered on each
    pub fn requests(&self) -> Vec<(ChatRequest, Vec<Tool>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete_with_tools(
        &self,
        request: &ChatRequest,
        tools: &[Tool],
    ) -> Result<ChatResponseWithTools, AppError> {
        self.requests
            .lock()
            .unwrap()
            .push((request.clone(), tools.to_vec()));
        let next = self.replies.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(text_reply("")))
    }
}

/// Completion carrying only text
pub fn text_reply(text: &str) -> ChatResponseWithTools {
    ChatResponseWithTools {
        content: Some(text.to_owned()),
        function_calls: None,
        model: "scripted-model".to_owned(),
        usage: None,
        finish_reason: Some("stop".to_owned()),
    }
}

/// Completion requesting function calls, optionally with accompanying text
pub fn tool_call_reply(calls: Vec<FunctionCall>, text: Option<&str>) -> ChatResponseWithTools {
    ChatResponseWithTools {
        content: text.map(str::to_owned),
        function_calls: Some(calls),
        model: "scripted-model".to_owned(),
        usage: None,
        finish_reason: Some("tool_calls".to_owned()),
    }
}

/// Function call with the given name and arguments
pub fn call(name: &str, args: Value) -> FunctionCall {
    FunctionCall::new(name, args)
}

/// Function call whose raw arguments failed to parse with `error`
pub fn malformed_call(name: &str, error: &str) -> FunctionCall {
    FunctionCall::with_invalid_arguments(name, error)
}

// ============================================================================
// Resources and router
// ============================================================================

/// Resources backed by `provider` with default configuration
pub fn create_test_resources(provider: Arc<dyn LlmProvider>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::with_provider(
        ServerConfig::default(),
        provider,
    ))
}

/// Full application router backed by `provider`
pub fn create_test_router(provider: Arc<dyn LlmProvider>) -> Router {
    build_router(create_test_resources(provider))
}
