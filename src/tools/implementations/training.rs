// ABOUTME: Training tool exposing the weekly workout planner.
// ABOUTME: Implements generate-workout-plan over JSON arguments.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Training Tools
//!
//! - `GenerateWorkoutPlanTool` - weekly exercise plan from level and schedule

use async_trait::async_trait;
use fitplan_core::constants::{limits, tools};
use fitplan_core::errors::AppResult;
use fitplan_intelligence::{generate_workout_plan, FitnessLevel, WorkoutGoal, WorkoutPlanRequest};
use serde_json::Value;
use tracing::debug;

use crate::tools::params::ToolArgs;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{FitnessTool, ToolCapabilities};

/// Tool producing a weekly workout plan.
pub struct GenerateWorkoutPlanTool;

#[async_trait]
impl FitnessTool for GenerateWorkoutPlanTool {
    fn name(&self) -> &'static str {
        tools::GENERATE_WORKOUT_PLAN
    }

    fn description(&self) -> &'static str {
        "Generate a weekly workout plan with exercises, sets, reps and rest for a fitness level, goal and training schedule"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object()
            .required_property(
                "fitnessLevel",
                PropertySchema::string_enum("Current fitness level", &FitnessLevel::VALUES),
            )
            .required_property(
                "goal",
                PropertySchema::string_enum("Training goal", &WorkoutGoal::VALUES),
            )
            .required_property(
                "daysPerWeek",
                PropertySchema::integer(
                    "Training days per week",
                    limits::MIN_DAYS_PER_WEEK,
                    limits::MAX_DAYS_PER_WEEK,
                ),
            )
            .required_property(
                "timePerSession",
                PropertySchema::integer(
                    "Minutes per training session",
                    limits::MIN_SESSION_MINUTES,
                    limits::MAX_SESSION_MINUTES,
                ),
            )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PLANNING | ToolCapabilities::TRAINING | ToolCapabilities::DETERMINISTIC
    }

    async fn execute(&self, args: Value) -> AppResult<ToolResult> {
        let args = ToolArgs::new(self.name(), &args)?;

        let request = WorkoutPlanRequest {
            fitness_level: args.parsed("fitnessLevel")?,
            goal: args.parsed("goal")?,
            days_per_week: args.whole("daysPerWeek")?,
            time_per_session: args.whole("timePerSession")?,
        };
        debug!(
            level = request.fitness_level.as_str(),
            days = request.days_per_week,
            minutes = request.time_per_session,
            "Generating workout plan"
        );

        let plan = generate_workout_plan(&request)?;
        Ok(ToolResult::from_serializable(&plan)?)
    }
}
