// ABOUTME: Deterministic fitness planning engine for the FitPlan service
// ABOUTME: Validation, Mifflin-St Jeor energy calculator, diet planner, workout planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Intelligence
//!
//! Pure, synchronous planners. Every function here takes its inputs by value
//! or shared reference, validates them, and returns a fresh result value.
//! There is no shared state, so any number of calls may run concurrently.
//!
//! - [`energy`]: BMR / TDEE via the Mifflin-St Jeor equation
//! - [`diet`]: macronutrient split and a four-meal daily plan
//! - [`workout`]: level-keyed exercise tables and a weekly plan
//! - [`validation`]: range checks and rounding shared by the planners

/// Range checks and rounding helpers
pub mod validation;

/// Metabolic calculator
pub mod energy;

/// Diet planner
pub mod diet;

/// Workout planner
pub mod workout;

pub use diet::{
    generate_diet_plan, DailyMealPlan, DietGoal, DietPlanRequest, DietPlanResult,
    DietPreference, MacroBreakdown, MacroRatios, Macronutrients,
};
pub use energy::{calculate_energy, ActivityFactor, BodyMetrics, EnergyResult, Gender};
pub use workout::{
    generate_workout_plan, Exercise, FitnessLevel, WorkoutDay, WorkoutGoal, WorkoutPlanRequest,
    WorkoutPlanResult,
};
