// ABOUTME: Diet planner producing a four-meal daily plan and macronutrient split
// ABOUTME: Goal-keyed ratio table, 4/4/9 kcal-per-gram conversion, fixed meal shares and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Diet Planner
//!
//! | Goal     | Protein | Carbs | Fat  |
//! |----------|---------|-------|------|
//! | lose     | 0.25    | 0.35  | 0.40 |
//! | maintain | 0.25    | 0.45  | 0.30 |
//! | gain     | 0.30    | 0.45  | 0.25 |
//!
//! Meals take a fixed share of the daily target: breakfast 25%, lunch 35%,
//! dinner 30%, snacks 10%. The diet preference is validated but does not yet
//! change the suggested foods.

use std::fmt;
use std::str::FromStr;

use fitplan_core::constants::nutrition;
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{ensure_positive, round_half_up, unknown_choice};

/// Dietary goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietGoal {
    /// Calorie deficit
    Lose,
    /// Calorie balance
    Maintain,
    /// Calorie surplus
    Gain,
}

impl DietGoal {
    /// Accepted wire values
    pub const VALUES: [&'static str; 3] = ["lose", "maintain", "gain"];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for DietGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            other => Err(unknown_choice("goal", other, &Self::VALUES)),
        }
    }
}

/// Dietary style preference (advisory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    /// No restriction
    Normal,
    /// Vegetarian
    Vegetarian,
    /// Ketogenic
    Keto,
    /// Mediterranean
    Mediterranean,
}

impl DietPreference {
    /// Accepted wire values
    pub const VALUES: [&'static str; 4] = ["normal", "vegetarian", "keto", "mediterranean"];

    /// All preferences
    pub const ALL: [Self; 4] = [Self::Normal, Self::Vegetarian, Self::Keto, Self::Mediterranean];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Vegetarian => "vegetarian",
            Self::Keto => "keto",
            Self::Mediterranean => "mediterranean",
        }
    }
}

impl FromStr for DietPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "vegetarian" => Ok(Self::Vegetarian),
            "keto" => Ok(Self::Keto),
            "mediterranean" => Ok(Self::Mediterranean),
            other => Err(unknown_choice("dietPreference", other, &Self::VALUES)),
        }
    }
}

/// Diet plan input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DietPlanRequest {
    /// Daily calorie target, must be positive
    pub target_calories: f64,
    /// Dietary goal
    pub goal: DietGoal,
    /// Optional preference, currently advisory only
    pub diet_preference: Option<DietPreference>,
}

/// Fractional share of calories per macronutrient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share (the remainder)
    pub fat: f64,
}

impl MacroRatios {
    /// Ratio table lookup
    #[must_use]
    pub fn for_goal(goal: DietGoal) -> Self {
        let protein = if goal == DietGoal::Gain {
            nutrition::PROTEIN_RATIO_GAIN
        } else {
            nutrition::PROTEIN_RATIO_DEFAULT
        };
        let carbs = if goal == DietGoal::Lose {
            nutrition::CARB_RATIO_LOSE
        } else {
            nutrition::CARB_RATIO_DEFAULT
        };
        Self {
            protein,
            carbs,
            fat: 1.0 - protein - carbs,
        }
    }
}

/// One macronutrient in grams and calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroBreakdown {
    /// Grams per day
    pub grams: i64,
    /// Calories per day
    pub calories: i64,
}

impl MacroBreakdown {
    fn from_share(target_calories: f64, ratio: f64, kcal_per_gram: f64) -> Self {
        let calories = round_half_up(target_calories * ratio);
        Self {
            grams: round_half_up(calories as f64 / kcal_per_gram),
            calories,
        }
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g ({} kcal)", self.grams, self.calories)
    }
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Macronutrients {
    /// Protein
    pub protein: MacroBreakdown,
    /// Carbohydrates
    pub carbs: MacroBreakdown,
    /// Fat
    pub fat: MacroBreakdown,
}

/// Four meal descriptions with their calorie figures embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyMealPlan {
    /// Breakfast suggestion
    pub breakfast: String,
    /// Lunch suggestion
    pub lunch: String,
    /// Dinner suggestion
    pub dinner: String,
    /// Snack suggestion
    pub snacks: String,
}

/// Diet plan output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResult {
    /// Meal breakdown
    pub daily_plan: DailyMealPlan,
    /// Macronutrient targets
    pub macronutrients: Macronutrients,
    /// General guidance
    pub tips: Vec<&'static str>,
}

const DIET_TIPS: [&str; 5] = [
    "Drink at least 8 glasses of water a day",
    "Eat smaller meals more often and avoid overeating",
    "Choose natural, minimally processed foods",
    "Limit salt and added sugar",
    "Keep a regular sleep schedule",
];

fn meal(description: &str, target_calories: f64, share: f64) -> String {
    format!(
        "{description} (about {} kcal)",
        round_half_up(target_calories * share)
    )
}

/// Build a daily diet plan.
///
/// # Errors
///
/// Returns a validation error when `target_calories` is not a positive finite number.
pub fn generate_diet_plan(request: &DietPlanRequest) -> AppResult<DietPlanResult> {
    let target = ensure_positive("targetCalories", request.target_calories)?;
    let ratios = MacroRatios::for_goal(request.goal);

    let macronutrients = Macronutrients {
        protein: MacroBreakdown::from_share(
            target,
            ratios.protein,
            nutrition::CALORIES_PER_GRAM_PROTEIN,
        ),
        carbs: MacroBreakdown::from_share(target, ratios.carbs, nutrition::CALORIES_PER_GRAM_CARB),
        fat: MacroBreakdown::from_share(target, ratios.fat, nutrition::CALORIES_PER_GRAM_FAT),
    };

    let daily_plan = DailyMealPlan {
        breakfast: meal(
            "Oatmeal with fresh fruit and a handful of nuts",
            target,
            nutrition::BREAKFAST_SHARE,
        ),
        lunch: meal(
            "Lean meat or fish with vegetables and brown rice",
            target,
            nutrition::LUNCH_SHARE,
        ),
        dinner: meal(
            "Grilled chicken breast with a mixed vegetable salad",
            target,
            nutrition::DINNER_SHARE,
        ),
        snacks: meal("Nuts, fruit, or yogurt", target, nutrition::SNACKS_SHARE),
    };

    debug!(
        goal = request.goal.as_str(),
        preference = request.diet_preference.map(DietPreference::as_str),
        target_calories = target,
        "Generated diet plan"
    );

    Ok(DietPlanResult {
        daily_plan,
        macronutrients,
        tips: DIET_TIPS.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_table() {
        let gain = MacroRatios::for_goal(DietGoal::Gain);
        assert!((gain.protein - 0.30).abs() < 1e-9);
        assert!((gain.carbs - 0.45).abs() < 1e-9);
        assert!((gain.fat - 0.25).abs() < 1e-9);

        let maintain = MacroRatios::for_goal(DietGoal::Maintain);
        assert!((maintain.fat - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_macro_display() {
        let breakdown = MacroBreakdown {
            grams: 125,
            calories: 500,
        };
        assert_eq!(breakdown.to_string(), "125g (500 kcal)");
    }

    #[test]
    fn test_meal_text_carries_calories() {
        let plan = generate_diet_plan(&DietPlanRequest {
            target_calories: 1800.0,
            goal: DietGoal::Maintain,
            diet_preference: None,
        })
        .unwrap();

        assert!(plan.daily_plan.breakfast.ends_with("(about 450 kcal)"));
        assert!(plan.daily_plan.lunch.ends_with("(about 630 kcal)"));
        assert!(plan.daily_plan.dinner.ends_with("(about 540 kcal)"));
        assert!(plan.daily_plan.snacks.ends_with("(about 180 kcal)"));
    }

    #[test]
    fn test_rejects_non_positive_target() {
        for target in [0.0, -100.0, f64::NAN] {
            let request = DietPlanRequest {
                target_calories: target,
                goal: DietGoal::Lose,
                diet_preference: None,
            };
            assert!(generate_diet_plan(&request).unwrap_err().is_validation());
        }
    }
}
