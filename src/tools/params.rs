// ABOUTME: Typed argument extraction for tool calls
// ABOUTME: Turns a JSON arguments object into numbers, whole numbers, and parsed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Argument extraction helpers.
//!
//! Type problems (missing key, wrong JSON type) become [`ToolError`]s; range
//! and enumeration checks are left to the planners.

use std::str::FromStr;

use fitplan_core::errors::{AppError, AppResult, ToolError};
use fitplan_intelligence::validation::whole_number;
use serde_json::Value;

/// Borrowed view over one tool call's arguments
pub struct ToolArgs<'a> {
    tool: &'static str,
    args: &'a Value,
}

impl<'a> ToolArgs<'a> {
    /// Wrap the arguments of a call to `tool`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `args` is not a JSON object.
    pub fn new(tool: &'static str, args: &'a Value) -> AppResult<Self> {
        if args.is_object() {
            Ok(Self { tool, args })
        } else {
            Err(ToolError::invalid_parameter(tool, "arguments", "expected a JSON object").into())
        }
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.args.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &str) -> AppResult<&'a Value> {
        self.present(key)
            .ok_or_else(|| ToolError::missing_parameter(self.tool, key).into())
    }

    /// Required number
    ///
    /// # Errors
    ///
    /// Returns a validation error when absent or not a number.
    pub fn number(&self, key: &str) -> AppResult<f64> {
        self.require(key)?.as_f64().ok_or_else(|| {
            ToolError::invalid_parameter(self.tool, key, "expected a number").into()
        })
    }

    /// Required whole number
    ///
    /// # Errors
    ///
    /// Returns a validation error when absent, not a number, or fractional.
    pub fn whole(&self, key: &str) -> AppResult<u32> {
        whole_number(key, self.number(key)?)
    }

    /// Required string
    ///
    /// # Errors
    ///
    /// Returns a validation error when absent or not a string.
    pub fn string(&self, key: &str) -> AppResult<&'a str> {
        self.require(key)?.as_str().ok_or_else(|| {
            ToolError::invalid_parameter(self.tool, key, "expected a string").into()
        })
    }

    /// Required enumeration parsed via `FromStr`
    ///
    /// # Errors
    ///
    /// Returns a validation error when absent, not a string, or not a member.
    pub fn parsed<T>(&self, key: &str) -> AppResult<T>
    where
        T: FromStr<Err = AppError>,
    {
        self.string(key)?.parse()
    }

    /// Optional enumeration parsed via `FromStr`
    ///
    /// # Errors
    ///
    /// Returns a validation error when present but not a valid member.
    pub fn optional_parsed<T>(&self, key: &str) -> AppResult<Option<T>>
    where
        T: FromStr<Err = AppError>,
    {
        if self.present(key).is_none() {
            return Ok(None);
        }
        self.parsed(key).map(Some)
    }

    /// Raw value, for parameters accepting more than one JSON type
    ///
    /// # Errors
    ///
    /// Returns a validation error when absent.
    pub fn raw(&self, key: &str) -> AppResult<&'a Value> {
        self.require(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_missing_and_mistyped() {
        let value = json!({"height": "tall", "days": 2.5});
        let args = ToolArgs::new("t", &value).unwrap();

        assert_eq!(
            args.number("weight").unwrap_err().code,
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            args.number("height").unwrap_err().code,
            ErrorCode::InvalidInput
        );
        assert_eq!(args.whole("days").unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let value = json!({"dietPreference": null});
        let args = ToolArgs::new("t", &value).unwrap();
        let parsed: Option<fitplan_intelligence::DietPreference> =
            args.optional_parsed("dietPreference").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(ToolArgs::new("t", &json!([1, 2])).is_err());
    }
}
