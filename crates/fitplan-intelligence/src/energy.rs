// ABOUTME: Metabolic calculator using the Mifflin-St Jeor equation
// ABOUTME: Body metrics to BMR, TDEE, weight-loss and weight-gain calorie targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Metabolic Calculator
//!
//! Estimates basal metabolic rate (BMR) with the Mifflin-St Jeor coefficients
//! and scales it by one of five activity factors to obtain total daily energy
//! expenditure (TDEE).
//!
//! BMR is rounded half-up first; TDEE is the rounded product of the rounded
//! BMR and the factor; the loss and gain targets are TDEE -/+ 500 kcal.
//!
//! # Reference
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.

use std::fmt;
use std::str::FromStr;

use fitplan_core::constants::{limits, mifflin_st_jeor, nutrition};
use fitplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{ensure_in_range, unknown_choice};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Gender {
    /// Accepted wire values
    pub const VALUES: [&'static str; 2] = ["male", "female"];

    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(unknown_choice("gender", other, &Self::VALUES)),
        }
    }
}

/// One of the five discrete activity multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityFactor {
    /// 1.2 - desk job, little or no exercise
    Sedentary,
    /// 1.375 - light exercise 1-3 days per week
    Light,
    /// 1.55 - moderate exercise 3-5 days per week
    Moderate,
    /// 1.725 - hard exercise 6-7 days per week
    Active,
    /// 1.9 - daily hard training or physical labour
    Extreme,
}

impl ActivityFactor {
    /// All factors in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::Extreme,
    ];

    /// Accepted string forms on the tool-call surface
    pub const VALUES: [&'static str; 5] = ["1.2", "1.375", "1.55", "1.725", "1.9"];

    /// Numeric multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::Extreme => 1.9,
        }
    }

    /// Multiplier in thousandths, used for exact TDEE rounding
    #[must_use]
    pub const fn multiplier_milli(self) -> i64 {
        match self {
            Self::Sedentary => 1200,
            Self::Light => 1375,
            Self::Moderate => 1550,
            Self::Active => 1725,
            Self::Extreme => 1900,
        }
    }

    /// String form used by the tool schema
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "1.2",
            Self::Light => "1.375",
            Self::Moderate => "1.55",
            Self::Active => "1.725",
            Self::Extreme => "1.9",
        }
    }

    /// Activity-level description returned to callers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Extreme => "extreme",
        }
    }

    /// Resolve an exact numeric multiplier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `value` is one of the five multipliers.
    pub fn from_multiplier(value: f64) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|factor| (factor.multiplier() - value).abs() < f64::EPSILON)
            .ok_or_else(|| unknown_choice("activityLevel", &value.to_string(), &Self::VALUES))
    }
}

impl FromStr for ActivityFactor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|factor| factor.as_str() == s)
            .ok_or_else(|| unknown_choice("activityLevel", s, &Self::VALUES))
    }
}

impl fmt::Display for ActivityFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body metrics for one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    /// Height in cm, `[100, 250]`
    pub height_cm: f64,
    /// Weight in kg, `[20, 200]`
    pub weight_kg: f64,
    /// Age in years, `[10, 100]`
    pub age_years: f64,
    /// Gender
    pub gender: Gender,
    /// Activity multiplier
    pub activity: ActivityFactor,
}

impl BodyMetrics {
    /// Check every numeric field against its declared range.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first field out of range.
    pub fn validate(&self) -> AppResult<()> {
        ensure_in_range(
            "height",
            self.height_cm,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM,
            "cm",
        )?;
        ensure_in_range(
            "weight",
            self.weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
            "kg",
        )?;
        ensure_in_range(
            "age",
            self.age_years,
            limits::MIN_AGE_YEARS,
            limits::MAX_AGE_YEARS,
            "years",
        )?;
        Ok(())
    }

    /// Mifflin-St Jeor BMR in thousandths of a kcal, before rounding
    #[must_use]
    pub fn bmr_millikcal(&self) -> f64 {
        let (base, weight_coef, height_coef, age_coef) = match self.gender {
            Gender::Male => (
                mifflin_st_jeor::MALE_BASE_MILLI,
                mifflin_st_jeor::MALE_WEIGHT_MILLI,
                mifflin_st_jeor::MALE_HEIGHT_MILLI,
                mifflin_st_jeor::MALE_AGE_MILLI,
            ),
            Gender::Female => (
                mifflin_st_jeor::FEMALE_BASE_MILLI,
                mifflin_st_jeor::FEMALE_WEIGHT_MILLI,
                mifflin_st_jeor::FEMALE_HEIGHT_MILLI,
                mifflin_st_jeor::FEMALE_AGE_MILLI,
            ),
        };

        // Whole-number inputs keep every component an exact integer
        let weight_component = weight_coef as f64 * self.weight_kg;
        let height_component = height_coef as f64 * self.height_cm;
        let age_component = age_coef as f64 * self.age_years;

        base as f64 + weight_component + height_component - age_component
    }

    /// Mifflin-St Jeor BMR rounded half-up to whole kcal
    #[must_use]
    pub fn bmr(&self) -> i64 {
        round_millis_half_up(self.bmr_millikcal())
    }
}

/// Round a value in thousandths to whole units, halves rounding up
fn round_millis_half_up(millis: f64) -> i64 {
    (millis + MILLI_HALF).div_euclid(MILLI) as i64
}

const MILLI: f64 = 1000.0;
const MILLI_HALF: f64 = 500.0;

/// Energy figures derived from one set of body metrics (kcal/day)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    /// Basal metabolic rate
    pub bmr: i64,
    /// Total daily energy expenditure
    pub tdee: i64,
    /// Daily target for weight loss
    pub weight_loss: i64,
    /// Daily target for weight gain
    pub weight_gain: i64,
    /// Activity level label
    pub activity_description: &'static str,
}

/// Compute BMR, TDEE, and loss/gain targets.
///
/// # Errors
///
/// Returns a validation error when any metric is outside its declared range.
pub fn calculate_energy(metrics: &BodyMetrics) -> AppResult<EnergyResult> {
    metrics.validate()?;

    let bmr = metrics.bmr();
    let tdee = round_millis_half_up((bmr * metrics.activity.multiplier_milli()) as f64);

    debug!(
        gender = metrics.gender.as_str(),
        activity = metrics.activity.as_str(),
        bmr,
        tdee,
        "Calculated energy expenditure"
    );

    Ok(EnergyResult {
        bmr,
        tdee,
        weight_loss: tdee - nutrition::CALORIE_ADJUSTMENT,
        weight_gain: tdee + nutrition::CALORIE_ADJUSTMENT,
        activity_description: metrics.activity.label(),
    })
}
