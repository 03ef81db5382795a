// ABOUTME: Central registry for planning tools with lookup, execution, and LLM declarations.
// ABOUTME: Built once at startup and shared immutably by the agent loop and any orchestrator.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Tool Registry
//!
//! The registry is the tool-call surface: callers run a planner by id with a
//! JSON arguments object and get the planner's result back unchanged.
//!
//! - Tool registration and lookup
//! - Execution with timing and structured logging
//! - Function declarations for the LLM
//!
//! # Example
//!
//! ```
//! use fitplan_server::tools::registry::ToolRegistry;
//!
//! let registry = ToolRegistry::with_planning_tools();
//! assert_eq!(registry.len(), 3);
//! assert!(registry.contains("calculate-calories"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use fitplan_core::errors::{AppResult, ToolError};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::llm::{FunctionDeclaration, Tool};
use crate::logging::AppLogger;

use super::implementations::create_planning_tools;
use super::result::ToolResult;
use super::traits::FitnessTool;

/// Central registry for planning tools.
///
/// Tools are `Arc`-wrapped so the registry can be shared across request
/// tasks after startup without copying.
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn FitnessTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry holding the three planning tools
    #[must_use]
    pub fn with_planning_tools() -> Self {
        let mut registry = Self::new();
        for tool in create_planning_tools() {
            registry.register(tool);
        }
        info!("Registered {} planning tools", registry.len());
        registry
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn FitnessTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{name}' is already registered, skipping");
            return false;
        }

        debug!(
            "Registering tool '{name}' with capabilities: {}",
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn FitnessTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - Tool is not found (`ResourceNotFound`)
    /// - An argument is missing, mistyped, or outside its range (validation codes)
    pub async fn execute(&self, name: &str, args: Value) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;

        let start = Instant::now();
        let result = tool.execute(args).await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        AppLogger::log_tool_call(name, result.is_ok(), duration_ms);
        result
    }

    /// Function declarations for the given tool names, skipping unknown names
    #[must_use]
    pub fn function_declarations_for(&self, names: &[&str]) -> Vec<FunctionDeclaration> {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .map(|tool| FunctionDeclaration {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: Some(tool.input_schema().to_value()),
            })
            .collect()
    }

    /// Function declarations for every registered tool, sorted by name
    #[must_use]
    pub fn function_declarations(&self) -> Vec<FunctionDeclaration> {
        self.function_declarations_for(&self.tool_names())
    }

    /// Declarations for `names` grouped the way LLM providers expect them
    #[must_use]
    pub fn as_llm_tools(&self, names: &[&str]) -> Vec<Tool> {
        let function_declarations = self.function_declarations_for(names);
        if function_declarations.is_empty() {
            Vec::new()
        } else {
            vec![Tool {
                function_declarations,
            }]
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::implementations::CalculateCaloriesTool;
    use fitplan_core::constants::tools::ALL_TOOLS;

    #[test]
    fn test_duplicate_registration_is_skipped() {
        let mut registry = ToolRegistry::new();
        assert!(registry.register(Arc::new(CalculateCaloriesTool)));
        assert!(!registry.register(Arc::new(CalculateCaloriesTool)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declarations_cover_all_tools() {
        let registry = ToolRegistry::with_planning_tools();
        let declarations = registry.function_declarations();
        let mut expected = ALL_TOOLS.to_vec();
        expected.sort_unstable();

        let names: Vec<&str> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, expected);
        assert!(declarations.iter().all(|d| d.parameters.is_some()));
    }

    #[test]
    fn test_llm_tools_skip_unknown_names() {
        let registry = ToolRegistry::with_planning_tools();
        assert!(registry.as_llm_tools(&["nope"]).is_empty());
        assert_eq!(
            registry.as_llm_tools(&ALL_TOOLS)[0]
                .function_declarations
                .len(),
            3
        );
    }
}
