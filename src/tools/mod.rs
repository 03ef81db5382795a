// ABOUTME: Tool-call surface for the planners: trait, schema, arguments, results, registry.
// ABOUTME: The agent loop and any orchestrator run planners through the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Planning tools and the registry that executes them.

/// Tool implementations by category
pub mod implementations;
/// Typed argument extraction
pub mod params;
/// Tool registry
pub mod registry;
/// Tool result type
pub mod result;
/// JSON Schema for tool inputs
pub mod schema;
/// Tool trait and capability flags
pub mod traits;

pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use schema::{JsonSchema, PropertySchema};
pub use traits::{FitnessTool, ToolCapabilities};
