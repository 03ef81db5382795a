// ABOUTME: Input validation layer shared by all planners
// ABOUTME: Inclusive range checks, whole-number checks, enum errors, and half-up rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Validation helpers.
//!
//! Planners call these before computing anything. Every failure is a
//! validation-family [`AppError`] (HTTP 400); values are never clamped or
//! coerced into range.

use fitplan_core::errors::{AppError, AppResult};

/// Round to the nearest integer, halves rounding up.
///
/// `f64::round` rounds halves away from zero; for the non-negative energy
/// figures handled here both agree, but half-up is the documented rule.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Check that `value` is finite and inside `[min, max]`.
///
/// # Errors
///
/// Returns `InvalidInput` for NaN/infinite values and `ValueOutOfRange` when
/// the value falls outside the inclusive range.
pub fn ensure_in_range(field: &str, value: f64, min: f64, max: f64, unit: &str) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number"
        )));
    }
    if value < min || value > max {
        return Err(AppError::out_of_range(format!(
            "{field} must be between {min} and {max} {unit} (got {value})"
        )));
    }
    Ok(value)
}

/// Check that an integer lies inside `[min, max]`.
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the value falls outside the inclusive range.
pub fn ensure_count_in_range(
    field: &str,
    value: u32,
    min: u32,
    max: u32,
    unit: &str,
) -> AppResult<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::out_of_range(format!(
            "{field} must be between {min} and {max} {unit} (got {value})"
        )))
    }
}

/// Check that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns `InvalidInput` for NaN/infinite values and `ValueOutOfRange` for
/// zero or negative values.
pub fn ensure_positive(field: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!(
            "{field} must be a finite number"
        )));
    }
    if value <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "{field} must be greater than 0 (got {value})"
        )));
    }
    Ok(value)
}

/// Convert a JSON number into a whole `u32`, rejecting fractions.
///
/// # Errors
///
/// Returns `InvalidInput` when the value is fractional, negative, or too large.
pub fn whole_number(field: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "{field} must be a whole number (got {value})"
        )));
    }
    Ok(value as u32)
}

/// Build the error for a string outside its enumeration.
#[must_use]
pub fn unknown_choice(field: &str, value: &str, allowed: &[&str]) -> AppError {
    AppError::invalid_input(format!(
        "{field} must be one of: {} (got '{value}')",
        allowed.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1786.647), 1787);
        assert_eq!(round_half_up(1370.233), 1370);
        assert_eq!(round_half_up(88.5), 89);
        assert_eq!(round_half_up(2769.85), 2770);
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(ensure_in_range("height", 100.0, 100.0, 250.0, "cm").is_ok());
        assert!(ensure_in_range("height", 250.0, 100.0, 250.0, "cm").is_ok());

        let err = ensure_in_range("height", 99.0, 100.0, 250.0, "cm").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.message, "height must be between 100 and 250 cm (got 99)");
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ensure_in_range("weight", f64::NAN, 20.0, 200.0, "kg").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(ensure_positive("targetCalories", f64::INFINITY).is_err());
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number("daysPerWeek", 3.0).unwrap(), 3);
        assert!(whole_number("daysPerWeek", 3.5).is_err());
        assert!(whole_number("daysPerWeek", -1.0).is_err());
    }

    #[test]
    fn test_unknown_choice_lists_allowed_values() {
        let err = unknown_choice("gender", "other", &["male", "female"]);
        assert_eq!(err.message, "gender must be one of: male, female (got 'other')");
        assert!(err.is_validation());
    }
}
