// ABOUTME: Agent roster and the multi-turn tool execution loop behind POST /api/chat
// ABOUTME: An agent is instructions plus a model plus the tools it may call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Agents
//!
//! The roster is fixed at startup and currently holds the Body Agent. A chat
//! message is answered by [`run_agent`]: the agent's instructions, the user
//! message and the agent's tool declarations go to the LLM; every requested
//! function call is executed through the [`ToolRegistry`] and its result is
//! fed back, until the model answers with text.

use std::collections::BTreeMap;
use std::time::Instant;

use fitplan_core::constants::{agents, llm as llm_constants, tools as tool_ids};
use fitplan_core::errors::{AppError, AppResult, ErrorCode, ToolError};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::llm::{body_agent_instructions, ChatMessage, ChatRequest, FunctionCall, LlmProvider};
use crate::logging::AppLogger;
use crate::tools::{ToolRegistry, ToolResult};

/// A named assistant backed by the LLM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Lookup key used by `agentName`
    pub key: String,
    /// Human readable name
    pub display_name: String,
    /// System instructions
    #[serde(skip)]
    pub instructions: String,
    /// Model override; the provider default applies when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Tools this agent may call
    pub tools: Vec<String>,
}

impl Agent {
    /// The built-in fitness and nutrition agent
    #[must_use]
    pub fn body_agent(model: Option<String>) -> Self {
        Self {
            key: agents::BODY_AGENT.to_owned(),
            display_name: agents::BODY_AGENT_DISPLAY_NAME.to_owned(),
            instructions: body_agent_instructions().to_owned(),
            model,
            tools: tool_ids::ALL_TOOLS.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    /// Whether the agent is allowed to call `tool`
    #[must_use]
    pub fn can_use(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(String::as_str).collect()
    }
}

/// Agents by key, in key order
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    agents: BTreeMap<String, Agent>,
}

impl AgentRegistry {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster holding the Body Agent
    #[must_use]
    pub fn with_body_agent(model: Option<String>) -> Self {
        let mut registry = Self::new();
        registry.register(Agent::body_agent(model));
        registry
    }

    /// Add or replace an agent
    pub fn register(&mut self, agent: Agent) {
        debug!(agent = %agent.key, tools = agent.tools.len(), "Registering agent");
        self.agents.insert(agent.key.clone(), agent);
    }

    /// Look up an agent by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Agent> {
        self.agents.get(key)
    }

    /// Agent keys in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }

    /// Number of agents
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Final answer of one agent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReply {
    /// Text returned by the model
    pub text: String,
    /// LLM round trips used
    pub iterations: usize,
}

/// Answer `message` with `agent`, executing requested tools until the model
/// replies with text.
///
/// Tool failures are reported back to the model as `{"error": message}`
/// rather than ending the run.
///
/// # Errors
///
/// Returns an upstream error when the LLM call fails or when the model is
/// still requesting tools after the iteration limit.
pub async fn run_agent(
    agent: &Agent,
    message: &str,
    provider: &dyn LlmProvider,
    tools: &ToolRegistry,
) -> AppResult<AgentReply> {
    let start = Instant::now();
    let result = run_tool_loop(agent, message, provider, tools).await;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    let iterations = result.as_ref().map_or(0, |reply| reply.iterations);
    AppLogger::log_agent_run(&agent.key, iterations, result.is_ok(), duration_ms);
    result
}

async fn run_tool_loop(
    agent: &Agent,
    message: &str,
    provider: &dyn LlmProvider,
    tools: &ToolRegistry,
) -> AppResult<AgentReply> {
    let model = agent
        .model
        .clone()
        .unwrap_or_else(|| provider.default_model().to_owned());
    let llm_tools = tools.as_llm_tools(&agent.tool_names());
    let declaration_count: usize = llm_tools
        .iter()
        .map(|tool| tool.function_declarations.len())
        .sum();
    let mut messages = vec![
        ChatMessage::system(agent.instructions.as_str()),
        ChatMessage::user(message),
    ];

    for iteration in 1..=llm_constants::MAX_TOOL_ITERATIONS {
        let request = ChatRequest::new(messages.clone()).with_model(model.as_str());
        AppLogger::log_llm_request(&model, request.messages.len(), declaration_count);
        let response = provider.complete_with_tools(&request, &llm_tools).await?;

        let Some(calls) = response.function_calls.filter(|calls| !calls.is_empty()) else {
            return Ok(AgentReply {
                text: response.content.unwrap_or_default(),
                iterations: iteration,
            });
        };

        info!("Iteration {iteration}: Executing {} tool calls", calls.len());

        if let Some(text) = response.content.filter(|text| !text.is_empty()) {
            messages.push(ChatMessage::assistant(text));
        }

        for call in &calls {
            let output = execute_function_call(agent, tools, call).await;
            let output_text = serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_owned());
            messages.push(ChatMessage::user(format!(
                "[Tool Result for {}]: {output_text}",
                call.name
            )));
        }
    }

    Err(AppError::new(
        ErrorCode::ExternalServiceError,
        "Agent exceeded maximum tool iterations",
    ))
}

/// Run one function call, turning any failure into an error payload for the model
async fn execute_function_call(agent: &Agent, tools: &ToolRegistry, call: &FunctionCall) -> Value {
    info!("Executing tool: {}", call.name);

    let result = match (agent.can_use(&call.name), &call.arguments_error) {
        (false, _) => Err(ToolError::not_found(call.name.as_str()).into()),
        (true, Some(reason)) => Err(ToolError::invalid_parameter(
            call.name.as_str(),
            "arguments",
            reason.as_str(),
        )
        .into()),
        (true, None) => tools.execute(&call.name, call.args.clone()).await,
    };

    match result {
        Ok(output) => output.content,
        Err(error) => {
            debug!(tool = %call.name, error = %error, "Tool call failed, reporting to model");
            ToolResult::from_app_error(&error).content
        }
    }
}
