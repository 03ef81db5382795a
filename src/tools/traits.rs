// ABOUTME: Defines the FitnessTool trait and ToolCapabilities for the tool-call surface
// ABOUTME: Planning tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Tool Trait and Capabilities
//!
//! Every planner exposed to the agent implements [`FitnessTool`]:
//! - metadata (name, description, input schema)
//! - capability flags used for logging and discovery
//! - async execution over a JSON arguments object

use async_trait::async_trait;
use bitflags::bitflags;
use fitplan_core::errors::AppResult;
use serde_json::Value;

use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Produces numeric calculations
        const CALCULATION = 0b0000_0001;
        /// Produces a plan document
        const PLANNING = 0b0000_0010;
        /// Nutrition domain
        const NUTRITION = 0b0000_0100;
        /// Training domain
        const TRAINING = 0b0000_1000;
        /// Same input always yields the same output
        const DETERMINISTIC = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::CALCULATION, "calculation"),
            (Self::PLANNING, "planning"),
            (Self::NUTRITION, "nutrition"),
            (Self::TRAINING, "training"),
            (Self::DETERMINISTIC, "deterministic"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// A planner exposed on the tool-call surface.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use fitplan_core::errors::AppResult;
/// use fitplan_server::tools::{FitnessTool, JsonSchema, ToolCapabilities, ToolResult};
/// use serde_json::Value;
///
/// struct EchoTool;
///
/// #[async_trait]
/// impl FitnessTool for EchoTool {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn description(&self) -> &'static str {
///         "Returns its arguments"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::object()
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::DETERMINISTIC
///     }
///
///     async fn execute(&self, args: Value) -> AppResult<ToolResult> {
///         Ok(ToolResult::ok(args))
///     }
/// }
/// ```
#[async_trait]
pub trait FitnessTool: Send + Sync {
    /// Unique tool identifier
    fn name(&self) -> &'static str;

    /// Description shown to the model
    fn description(&self) -> &'static str;

    /// JSON Schema of the arguments object
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Validate `args` and run the planner
    async fn execute(&self, args: Value) -> AppResult<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let caps = ToolCapabilities::PLANNING | ToolCapabilities::TRAINING;
        assert_eq!(caps.describe(), "planning, training");
        assert_eq!(ToolCapabilities::empty().describe(), "none");
        assert_eq!(
            (ToolCapabilities::CALCULATION | ToolCapabilities::DETERMINISTIC).describe(),
            "calculation, deterministic"
        );
    }
}
