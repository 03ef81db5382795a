// ABOUTME: Tool-specific error types for the tool-call surface
// ABOUTME: Structured errors that convert into the main AppError taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Tool Error Types
//!
//! Provides structured error types for tool-related operations:
//! - `ToolError` - Errors specific to tool lookup and argument extraction
//! - Conversion to `AppError` so the dispatcher renders them uniformly

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors specific to tool operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Tool was not found in the registry
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },
    /// Tool parameter has the wrong JSON type
    InvalidParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },
    /// Required parameter is missing
    MissingParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the missing parameter
        parameter: String,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        tool_name: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(tool_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Get the tool name associated with this error
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::NotFound { tool_name }
            | Self::InvalidParameter { tool_name, .. }
            | Self::MissingParameter { tool_name, .. } => tool_name,
        }
    }

    /// Error code this tool error maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::ResourceNotFound,
            Self::InvalidParameter { .. } => ErrorCode::InvalidInput,
            Self::MissingParameter { .. } => ErrorCode::MissingRequiredField,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tool_name } => {
                write!(f, "Tool '{tool_name}' not found")
            }
            Self::InvalidParameter {
                tool_name,
                parameter,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' for tool '{tool_name}': {reason}"
                )
            }
            Self::MissingParameter {
                tool_name,
                parameter,
            } => {
                write!(
                    f,
                    "Missing required parameter '{parameter}' for tool '{tool_name}'"
                )
            }
        }
    }
}

impl Error for ToolError {}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        let code = error.code();
        Self::new(code, error.to_string()).with_detail("tool", error.tool_name())
    }
}
