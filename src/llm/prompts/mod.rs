// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the Body Agent fitness and nutrition assistant instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # System Prompts
//!
//! Prompts live in markdown files next to this module and are embedded at
//! compile time.

/// Body Agent instructions: data collection, activity factor guide, tool usage,
/// markdown table output, and safety guidance
pub const BODY_AGENT_PROMPT: &str = include_str!("body_agent.md");

/// Get the system prompt for the Body Agent
#[must_use]
pub const fn body_agent_instructions() -> &'static str {
    BODY_AGENT_PROMPT
}
