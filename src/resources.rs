// ABOUTME: Shared resource container handed to every HTTP handler
// ABOUTME: Holds the agent roster, the tool registry, the LLM provider, and the loaded config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Server Resources
//!
//! Everything here is built once at startup and shared immutably behind
//! `Arc`; no state survives across requests.

use std::sync::Arc;

use fitplan_core::errors::AppResult;

use crate::agents::AgentRegistry;
use crate::config::ServerConfig;
use crate::llm::{LlmProvider, OpenAiCompatibleProvider};
use crate::tools::ToolRegistry;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Agents by key
    pub agents: Arc<AgentRegistry>,
    /// Planning tools
    pub tools: Arc<ToolRegistry>,
    /// Language model backing the agents
    pub llm: Arc<dyn LlmProvider>,
}

impl ServerResources {
    /// Build production resources: Body Agent, planning tools, OpenAI-compatible provider
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for the LLM cannot be created
    pub fn new(config: ServerConfig) -> AppResult<Self> {
        let llm = OpenAiCompatibleProvider::new(config.llm.clone())?;
        Ok(Self::with_provider(config, Arc::new(llm)))
    }

    /// Build resources around an arbitrary provider
    #[must_use]
    pub fn with_provider(config: ServerConfig, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            config: Arc::new(config),
            agents: Arc::new(AgentRegistry::with_body_agent(None)),
            tools: Arc::new(ToolRegistry::with_planning_tools()),
            llm,
        }
    }
}
