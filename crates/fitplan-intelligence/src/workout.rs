// ABOUTME: Workout planner producing a weekly plan from level-keyed exercise tables
// ABOUTME: One exercise slot per 15 session minutes, capped by table size, same set every day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Workout Planner
//!
//! Each fitness level owns an ordered exercise table. A session fits one
//! exercise per 15 minutes, capped by the table size, and takes the table's
//! first entries in order. Every training day receives the same selection.

use std::str::FromStr;

use fitplan_core::constants::limits;
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{ensure_count_in_range, unknown_choice};

/// Training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced
    Advanced,
}

impl FitnessLevel {
    /// Accepted wire values
    pub const VALUES: [&'static str; 3] = ["beginner", "intermediate", "advanced"];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Ordered exercise table for this level
    #[must_use]
    pub const fn exercises(self) -> &'static [Exercise] {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Intermediate => &INTERMEDIATE,
            Self::Advanced => &ADVANCED,
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(unknown_choice("fitnessLevel", other, &Self::VALUES)),
        }
    }
}

/// Training goal (advisory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutGoal {
    /// Fat loss
    LoseWeight,
    /// Hypertrophy
    BuildMuscle,
    /// Aerobic capacity
    ImproveEndurance,
    /// All-round fitness
    GeneralFitness,
}

impl WorkoutGoal {
    /// Accepted wire values
    pub const VALUES: [&'static str; 4] = [
        "lose_weight",
        "build_muscle",
        "improve_endurance",
        "general_fitness",
    ];

    /// All goals
    pub const ALL: [Self; 4] = [
        Self::LoseWeight,
        Self::BuildMuscle,
        Self::ImproveEndurance,
        Self::GeneralFitness,
    ];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::BuildMuscle => "build_muscle",
            Self::ImproveEndurance => "improve_endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }
}

impl FromStr for WorkoutGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose_weight" => Ok(Self::LoseWeight),
            "build_muscle" => Ok(Self::BuildMuscle),
            "improve_endurance" => Ok(Self::ImproveEndurance),
            "general_fitness" => Ok(Self::GeneralFitness),
            other => Err(unknown_choice("goal", other, &Self::VALUES)),
        }
    }
}

/// One exercise prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Exercise name
    pub name: &'static str,
    /// Sets range
    pub sets: &'static str,
    /// Reps (or duration) range
    pub reps: &'static str,
    /// Rest between sets
    pub rest: &'static str,
}

const fn exercise(
    name: &'static str,
    sets: &'static str,
    reps: &'static str,
    rest: &'static str,
) -> Exercise {
    Exercise {
        name,
        sets,
        reps,
        rest,
    }
}

const BEGINNER: [Exercise; 4] = [
    exercise("Squats", "2-3", "8-12", "60s"),
    exercise("Push-ups", "2-3", "5-10", "60s"),
    exercise("Plank", "2-3", "20-30s", "60s"),
    exercise("Brisk walking", "1", "15-20 min", "none"),
];

const INTERMEDIATE: [Exercise; 5] = [
    exercise("Squats", "3-4", "10-15", "45s"),
    exercise("Push-ups", "3-4", "10-15", "45s"),
    exercise("Plank", "3", "30-60s", "45s"),
    exercise("Jogging", "1", "20-30 min", "none"),
    exercise("Dumbbell rows", "3", "10-12", "45s"),
];

const ADVANCED: [Exercise; 5] = [
    exercise("Squats", "4-5", "12-20", "30s"),
    exercise("Push-up variations", "4", "15-20", "30s"),
    exercise("Plank", "3", "60-90s", "30s"),
    exercise("Running", "1", "30-45 min", "none"),
    exercise("Pull-ups", "3-4", "5-12", "45s"),
];

const WORKOUT_TIPS: [&str; 6] = [
    "Warm up for 5-10 minutes before training",
    "Stretch after each session",
    "Increase intensity gradually and avoid overtraining",
    "Keep proper form; quality beats quantity",
    "Rest well, muscles grow during recovery",
    "Stop immediately if you feel pain",
];

/// Workout plan input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutPlanRequest {
    /// Experience level
    pub fitness_level: FitnessLevel,
    /// Goal, currently advisory only
    pub goal: WorkoutGoal,
    /// Training days, `[1, 7]`
    pub days_per_week: u32,
    /// Minutes per session, `[15, 180]`
    pub time_per_session: u32,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    /// "Day k"
    pub day: String,
    /// Exercises in table order
    pub exercises: Vec<Exercise>,
}

/// Workout plan output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanResult {
    /// Exactly `days_per_week` entries
    pub weekly_plan: Vec<WorkoutDay>,
    /// General guidance
    pub tips: Vec<&'static str>,
}

/// Number of exercises that fit one session at `level`
#[must_use]
pub fn exercises_per_session(level: FitnessLevel, time_per_session: u32) -> usize {
    let slots = (time_per_session / limits::MINUTES_PER_EXERCISE) as usize;
    slots.min(level.exercises().len())
}

/// Build a weekly workout plan.
///
/// # Errors
///
/// Returns a validation error when `days_per_week` or `time_per_session` is out of range.
pub fn generate_workout_plan(request: &WorkoutPlanRequest) -> AppResult<WorkoutPlanResult> {
    let days = ensure_count_in_range(
        "daysPerWeek",
        request.days_per_week,
        limits::MIN_DAYS_PER_WEEK,
        limits::MAX_DAYS_PER_WEEK,
        "days",
    )?;
    let minutes = ensure_count_in_range(
        "timePerSession",
        request.time_per_session,
        limits::MIN_SESSION_MINUTES,
        limits::MAX_SESSION_MINUTES,
        "minutes",
    )?;

    let count = exercises_per_session(request.fitness_level, minutes);
    let session = &request.fitness_level.exercises()[..count];

    let weekly_plan = (1..=days)
        .map(|k| WorkoutDay {
            day: format!("Day {k}"),
            exercises: session.to_vec(),
        })
        .collect();

    debug!(
        level = request.fitness_level.as_str(),
        goal = request.goal.as_str(),
        days,
        exercises_per_day = count,
        "Generated workout plan"
    );

    Ok(WorkoutPlanResult {
        weekly_plan,
        tips: WORKOUT_TIPS.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(FitnessLevel::Beginner.exercises().len(), 4);
        assert_eq!(FitnessLevel::Intermediate.exercises().len(), 5);
        assert_eq!(FitnessLevel::Advanced.exercises().len(), 5);
    }

    #[test]
    fn test_exercises_per_session_caps_at_table_size() {
        assert_eq!(exercises_per_session(FitnessLevel::Beginner, 15), 1);
        assert_eq!(exercises_per_session(FitnessLevel::Beginner, 40), 2);
        assert_eq!(exercises_per_session(FitnessLevel::Beginner, 180), 4);
        assert_eq!(exercises_per_session(FitnessLevel::Advanced, 75), 5);
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!(
            "improve_endurance".parse::<WorkoutGoal>().unwrap(),
            WorkoutGoal::ImproveEndurance
        );
        assert!("get_strong".parse::<WorkoutGoal>().is_err());
    }
}
