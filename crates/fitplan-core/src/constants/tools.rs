// ABOUTME: Tool identifier constants for the three planning tools
// ABOUTME: Single source of truth for tool names used by the registry and the agent

//! Tool identifier constants

/// Mifflin-St Jeor BMR / TDEE calculator
pub const CALCULATE_CALORIES: &str = "calculate-calories";
/// Daily meal and macronutrient plan
pub const GENERATE_DIET_PLAN: &str = "generate-diet-plan";
/// Weekly exercise plan
pub const GENERATE_WORKOUT_PLAN: &str = "generate-workout-plan";

/// All planning tools in registration order
pub const ALL_TOOLS: [&str; 3] = [CALCULATE_CALORIES, GENERATE_DIET_PLAN, GENERATE_WORKOUT_PLAN];
