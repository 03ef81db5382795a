// ABOUTME: Defines ToolResult, the value returned by tool execution
// ABOUTME: Wraps the planner output as JSON together with an error flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Tool Result Type

use fitplan_core::errors::AppError;
use serde::Serialize;
use serde_json::{json, Value};

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The result value returned to the caller
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Error result in the `{"error": message}` shape fed back to the model
    #[must_use]
    pub fn from_app_error(error: &AppError) -> Self {
        Self::error(json!({ "error": error.message }))
    }

    /// Create a result from a serializable value
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the value cannot be converted to JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
