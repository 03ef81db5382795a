// ABOUTME: LLM provider abstraction for the chat agent
// ABOUTME: Message, request, tool declaration, and function call types plus the provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # LLM Provider Interface
//!
//! The chat agent talks to a language model through [`LlmProvider`]. The
//! production implementation speaks the OpenAI chat-completions protocol;
//! tests substitute a scripted provider.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitplan_server::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a fitness assistant."),
//!         ChatMessage::user("How many calories do I burn at rest?"),
//!     ]);
//!     let response = provider.complete_with_tools(&request, &[]).await;
//! }
//! ```

mod openai_compatible;
pub mod prompts;

pub use openai_compatible::OpenAiCompatibleProvider;
pub use prompts::body_agent_instructions;

use async_trait::async_trait;
use fitplan_core::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier; the provider default applies when `None`
    pub model: Option<String>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Function the model may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Function name
    pub name: String,
    /// What the function does, shown to the model
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: Option<Value>,
}

/// Group of function declarations offered in one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Declarations in this group
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// Function call requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Function name
    pub name: String,
    /// Parsed arguments object; `Null` when the arguments failed to parse
    pub args: Value,
    /// Why the raw arguments could not be parsed, if they could not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments_error: Option<String>,
}

impl FunctionCall {
    /// Call with already-parsed arguments
    #[must_use]
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            name: name.into(),
            args,
            arguments_error: None,
        }
    }

    /// Call whose raw arguments were rejected by the JSON parser
    #[must_use]
    pub fn with_invalid_arguments(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Value::Null,
            arguments_error: Some(error.into()),
        }
    }
}

/// Completion that may contain function calls instead of (or next to) text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponseWithTools {
    /// Text content, if any
    pub content: Option<String>,
    /// Requested function calls, if any
    pub function_calls: Option<Vec<FunctionCall>>,
    /// Model that produced the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, `tool_calls`, length)
    pub finish_reason: Option<String>,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for tool-aware chat completion
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "openai")
    fn name(&self) -> &'static str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion offering the given tools
    async fn complete_with_tools(
        &self,
        request: &ChatRequest,
        tools: &[Tool],
    ) -> Result<ChatResponseWithTools, AppError>;
}
