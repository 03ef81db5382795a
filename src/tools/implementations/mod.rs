// ABOUTME: Module containing the planning tool implementations organized by category.
// ABOUTME: Nutrition covers energy and diet; training covers the workout planner.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Tool Implementations
//!
//! - `nutrition` - calorie calculation and diet planning
//! - `training` - workout planning

use std::sync::Arc;

use crate::tools::traits::FitnessTool;

/// Nutrition tools: calculate-calories, generate-diet-plan
pub mod nutrition;

/// Training tools: generate-workout-plan
pub mod training;

pub use nutrition::{CalculateCaloriesTool, GenerateDietPlanTool};
pub use training::GenerateWorkoutPlanTool;

/// Create all planning tools for registration, in registration order
#[must_use]
pub fn create_planning_tools() -> Vec<Arc<dyn FitnessTool>> {
    vec![
        Arc::new(CalculateCaloriesTool),
        Arc::new(GenerateDietPlanTool),
        Arc::new(GenerateWorkoutPlanTool),
    ]
}
