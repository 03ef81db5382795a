// ABOUTME: OpenAI chat-completions provider with function calling
// ABOUTME: Non-streaming requests with bounded timeouts, mapping every failure to an upstream error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! `OpenAI`-compatible provider.
//!
//! Works against api.openai.com and any server implementing
//! `POST {base_url}/chat/completions` with `tools` / `tool_calls`.
//! There is no retry: every transport, status, or decoding failure is
//! returned once as an upstream error.

use async_trait::async_trait;
use fitplan_core::constants::{env_config, llm::SERVICE_LABEL};
use fitplan_core::errors::{AppError, ErrorCode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{
    ChatMessage, ChatRequest, ChatResponseWithTools, FunctionCall, LlmProvider, TokenUsage, Tool,
};
use crate::config::LlmConfig;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for WireMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Serialize)]
struct WireTool<'a> {
    #[serde(rename = "type")]
    tool_type: &'static str,
    function: WireFunction<'a>,
}

#[derive(Debug, Serialize)]
struct WireFunction<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a Value>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    #[serde(default)]
    id: String,
    function: ToolCallFunction,
}

#[derive(Debug, Deserialize)]
struct ToolCallFunction {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

// ============================================================================
// Provider
// ============================================================================

/// `OpenAI` chat-completions client
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: LlmConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a provider with connect and request timeouts from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: LlmConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-2xx response to an upstream error carrying the API message
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<ErrorBody>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error.message,
        );

        let code = match status.as_u16() {
            429 | 502..=504 => ErrorCode::ExternalServiceUnavailable,
            _ => ErrorCode::ExternalServiceError,
        };
        AppError::new(
            code,
            format!("{SERVICE_LABEL} API error ({status}): {detail}"),
        )
    }

    fn convert_tools(tools: &[Tool]) -> Vec<WireTool<'_>> {
        tools
            .iter()
            .flat_map(|tool| tool.function_declarations.iter())
            .map(|func| WireTool {
                tool_type: "function",
                function: WireFunction {
                    name: &func.name,
                    description: &func.description,
                    parameters: func.parameters.as_ref(),
                },
            })
            .collect()
    }

    fn convert_tool_calls(tool_calls: Vec<ToolCall>) -> Vec<FunctionCall> {
        tool_calls
            .into_iter()
            .map(
                |call| match serde_json::from_str(&call.function.arguments) {
                    Ok(args) => FunctionCall::new(call.function.name, args),
                    Err(e) => {
                        warn!(
                            tool_call_id = %call.id,
                            function = %call.function.name,
                            "Tool call arguments are not valid JSON: {e}"
                        );
                        FunctionCall::with_invalid_arguments(
                            call.function.name,
                            format!("not valid JSON: {e}"),
                        )
                    }
                },
            )
            .collect()
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip_all, fields(model = %request.model.as_deref().unwrap_or(&self.config.model)))]
    async fn complete_with_tools(
        &self,
        request: &ChatRequest,
        tools: &[Tool],
    ) -> Result<ChatResponseWithTools, AppError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::external_unavailable(
                SERVICE_LABEL,
                format!("{} is not configured", env_config::OPENAI_API_KEY),
            )
        })?;

        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let wire_tools = Self::convert_tools(tools);

        let body = CompletionRequest {
            model,
            messages: request.messages.iter().map(WireMessage::from).collect(),
            tool_choice: (!wire_tools.is_empty()).then_some("auto"),
            tools: wire_tools,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {SERVICE_LABEL}: {e}");
                if e.is_timeout() {
                    AppError::external_unavailable(SERVICE_LABEL, "request timed out")
                } else if e.is_connect() {
                    AppError::external_unavailable(
                        SERVICE_LABEL,
                        format!("cannot connect to {}", self.config.base_url),
                    )
                } else {
                    AppError::external_service(SERVICE_LABEL, format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE_LABEL, format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &text));
        }

        let parsed: CompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(
                "Failed to parse {SERVICE_LABEL} response: {e} - body: {}",
                text.chars().take(500).collect::<String>()
            );
            AppError::external_service(SERVICE_LABEL, format!("failed to parse response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_LABEL, "API returned no choices"))?;

        let function_calls = choice.message.tool_calls.map(Self::convert_tool_calls);
        debug!(
            content_len = ?choice.message.content.as_ref().map(String::len),
            tool_calls = ?function_calls.as_ref().map(Vec::len),
            finish_reason = ?choice.finish_reason,
            "Received completion"
        );

        Ok(ChatResponseWithTools {
            content: choice.message.content,
            function_calls,
            model: if parsed.model.is_empty() {
                model.to_owned()
            } else {
                parsed.model
            },
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
