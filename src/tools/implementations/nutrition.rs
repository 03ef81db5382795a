// ABOUTME: Nutrition tools exposing the energy calculator and the diet planner.
// ABOUTME: Implements calculate-calories and generate-diet-plan over JSON arguments.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Nutrition Tools
//!
//! - `CalculateCaloriesTool` - BMR, TDEE and daily calorie targets
//! - `GenerateDietPlanTool` - meal split and macronutrient targets
//!
//! Both tools only extract typed arguments; range and enumeration checks are
//! performed by the planners in `fitplan_intelligence`.

use async_trait::async_trait;
use fitplan_core::constants::{limits, tools};
use fitplan_core::errors::AppResult;
use fitplan_intelligence::{
    calculate_energy, generate_diet_plan, ActivityFactor, BodyMetrics, DietGoal, DietPlanRequest,
    DietPreference, Gender,
};
use serde_json::Value;
use tracing::debug;

use crate::tools::params::ToolArgs;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{FitnessTool, ToolCapabilities};

// ============================================================================
// Helper functions
// ============================================================================

/// Activity level arrives either as one of the string factors or as the bare number
fn parse_activity_level(args: &ToolArgs<'_>) -> AppResult<ActivityFactor> {
    let raw = args.raw("activityLevel")?;
    match (raw.as_str(), raw.as_f64()) {
        (Some(text), _) => text.parse(),
        (None, Some(number)) => ActivityFactor::from_multiplier(number),
        (None, None) => args.string("activityLevel").and_then(str::parse),
    }
}

// ============================================================================
// CalculateCaloriesTool
// ============================================================================

/// Tool computing BMR, TDEE and weight loss/gain calorie targets.
pub struct CalculateCaloriesTool;

#[async_trait]
impl FitnessTool for CalculateCaloriesTool {
    fn name(&self) -> &'static str {
        tools::CALCULATE_CALORIES
    }

    fn description(&self) -> &'static str {
        "Calculate basal metabolic rate (BMR), total daily energy expenditure (TDEE) and daily calorie targets for weight loss and weight gain"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object()
            .required_property(
                "height",
                PropertySchema::number(
                    "Height in centimeters",
                    limits::MIN_HEIGHT_CM,
                    limits::MAX_HEIGHT_CM,
                ),
            )
            .required_property(
                "weight",
                PropertySchema::number(
                    "Weight in kilograms",
                    limits::MIN_WEIGHT_KG,
                    limits::MAX_WEIGHT_KG,
                ),
            )
            .required_property(
                "age",
                PropertySchema::number("Age in years", limits::MIN_AGE_YEARS, limits::MAX_AGE_YEARS),
            )
            .required_property(
                "gender",
                PropertySchema::string_enum("Gender", &Gender::VALUES),
            )
            .required_property(
                "activityLevel",
                PropertySchema::string_enum(
                    "Activity factor: 1.2 sedentary, 1.375 light, 1.55 moderate, 1.725 active, 1.9 extreme",
                    &ActivityFactor::VALUES,
                ),
            )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CALCULATION | ToolCapabilities::NUTRITION | ToolCapabilities::DETERMINISTIC
    }

    async fn execute(&self, args: Value) -> AppResult<ToolResult> {
        let args = ToolArgs::new(self.name(), &args)?;

        let metrics = BodyMetrics {
            height_cm: args.number("height")?,
            weight_kg: args.number("weight")?,
            age_years: args.number("age")?,
            gender: args.parsed("gender")?,
            activity: parse_activity_level(&args)?,
        };
        debug!(gender = %metrics.gender.as_str(), activity = %metrics.activity, "Calculating calories");

        let result = calculate_energy(&metrics)?;
        Ok(ToolResult::from_serializable(&result)?)
    }
}

// ============================================================================
// GenerateDietPlanTool
// ============================================================================

/// Tool producing a daily meal split and macronutrient targets.
pub struct GenerateDietPlanTool;

#[async_trait]
impl FitnessTool for GenerateDietPlanTool {
    fn name(&self) -> &'static str {
        tools::GENERATE_DIET_PLAN
    }

    fn description(&self) -> &'static str {
        "Generate a daily diet plan with meal calorie split, macronutrient targets and tips for a calorie target and goal"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object()
            .required_property(
                "targetCalories",
                PropertySchema::positive_number("Daily calorie target in kcal, greater than zero"),
            )
            .required_property(
                "goal",
                PropertySchema::string_enum("Weight goal", &DietGoal::VALUES),
            )
            .optional_property(
                "dietPreference",
                PropertySchema::string_enum("Dietary preference", &DietPreference::VALUES),
            )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PLANNING | ToolCapabilities::NUTRITION | ToolCapabilities::DETERMINISTIC
    }

    async fn execute(&self, args: Value) -> AppResult<ToolResult> {
        let args = ToolArgs::new(self.name(), &args)?;

        let request = DietPlanRequest {
            target_calories: args.number("targetCalories")?,
            goal: args.parsed("goal")?,
            diet_preference: args.optional_parsed("dietPreference")?,
        };
        debug!(goal = request.goal.as_str(), "Generating diet plan");

        let plan = generate_diet_plan(&request)?;
        Ok(ToolResult::from_serializable(&plan)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_activity_level_accepts_number_and_string() {
        let as_string = CalculateCaloriesTool
            .execute(json!({
                "height": 180, "weight": 75, "age": 30,
                "gender": "male", "activityLevel": "1.55"
            }))
            .await
            .unwrap();
        let as_number = CalculateCaloriesTool
            .execute(json!({
                "height": 180, "weight": 75, "age": 30,
                "gender": "male", "activityLevel": 1.55
            }))
            .await
            .unwrap();

        assert_eq!(as_string, as_number);
        assert_eq!(as_string.content["tdee"], 2770);
    }

    #[tokio::test]
    async fn test_activity_level_rejects_other_types() {
        let err = CalculateCaloriesTool
            .execute(json!({
                "height": 180, "weight": 75, "age": 30,
                "gender": "male", "activityLevel": true
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_diet_schema_marks_preference_optional() {
        let schema = GenerateDietPlanTool.input_schema();
        assert_eq!(schema.required, vec!["targetCalories", "goal"]);
        assert!(schema.properties.contains_key("dietPreference"));
    }
}
