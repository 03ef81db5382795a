// ABOUTME: JSON Schema types describing tool inputs
// ABOUTME: Object schemas with typed, documented, enumerated, and bounded properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Minimal JSON Schema model used for tool input declarations.
//!
//! Only what the planning tools need: an object with typed properties,
//! optional `enum` lists and numeric `minimum` / `maximum` /
//! `exclusiveMinimum` bounds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object schema for a tool's arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always "object" for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Properties by name
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of required properties
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
}

impl JsonSchema {
    /// Empty object schema
    #[must_use]
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_owned(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Add a required property
    #[must_use]
    pub fn required_property(mut self, name: &str, schema: PropertySchema) -> Self {
        self.required.push(name.to_owned());
        self.properties.insert(name.to_owned(), schema);
        self
    }

    /// Add an optional property
    #[must_use]
    pub fn optional_property(mut self, name: &str, schema: PropertySchema) -> Self {
        self.properties.insert(name.to_owned(), schema);
        self
    }

    /// Render as a JSON value for LLM function declarations
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Schema of one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type: number, integer, string
    #[serde(rename = "type")]
    pub property_type: String,
    /// Human-readable description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed string values
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Strict lower bound
    #[serde(
        rename = "exclusiveMinimum",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub exclusive_minimum: Option<f64>,
}

impl PropertySchema {
    fn typed(property_type: &str, description: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: Some(description.to_owned()),
            enum_values: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
        }
    }

    /// Number bounded to `[min, max]`
    #[must_use]
    pub fn number(description: &str, min: f64, max: f64) -> Self {
        Self {
            minimum: Some(min),
            maximum: Some(max),
            ..Self::typed("number", description)
        }
    }

    /// Number greater than zero, no upper bound
    #[must_use]
    pub fn positive_number(description: &str) -> Self {
        Self {
            exclusive_minimum: Some(0.0),
            ..Self::typed("number", description)
        }
    }

    /// Integer bounded to `[min, max]`
    #[must_use]
    pub fn integer(description: &str, min: u32, max: u32) -> Self {
        Self {
            minimum: Some(f64::from(min)),
            maximum: Some(f64::from(max)),
            ..Self::typed("integer", description)
        }
    }

    /// String restricted to `values`
    #[must_use]
    pub fn string_enum(description: &str, values: &[&str]) -> Self {
        Self {
            enum_values: Some(values.iter().map(|v| (*v).to_owned()).collect()),
            ..Self::typed("string", description)
        }
    }
}
