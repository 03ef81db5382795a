// ABOUTME: Unified error handling with error codes, HTTP status mapping, and JSON envelopes
// ABOUTME: AppError is the single failure type crossing the planner and dispatcher boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! # Unified Error Handling System
//!
//! Every failure in the service is an [`AppError`] carrying an [`ErrorCode`].
//! The code decides the HTTP status; the message and any attached details are
//! rendered into a flat JSON envelope:
//!
//! ```json
//! { "error": "Agent 'coach' not found", "availableAgents": ["bodyAgent"] }
//! ```
//!
//! The error taxonomy has four families:
//!
//! | Family     | Codes                                                        | Status |
//! |------------|--------------------------------------------------------------|--------|
//! | Validation | `InvalidInput`, `MissingRequiredField`, `ValueOutOfRange`    | 400    |
//! | Not found  | `ResourceNotFound`                                           | 404    |
//! | Upstream   | `ExternalServiceError`, `ExternalServiceUnavailable`         | 500    |
//! | Unknown    | `InternalError`, `SerializationError`, `ConfigError`         | 500    |

/// Tool-specific error types
pub mod tool;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

pub use tool::ToolError;

/// Generic message used for faults whose details are not part of the contract
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a type or enumeration check
    InvalidInput = 3000,
    /// A required field was absent or empty
    MissingRequiredField = 3001,
    /// A numeric field is outside its declared range
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Unknown route, agent, or tool
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// The LLM service returned an error or malformed payload
    ExternalServiceError = 5000,
    /// The LLM service could not be reached or is not configured
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Uncaught fault
    InternalError = 9000,
    /// Serialization of a result failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ConfigError
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether this code belongs to the validation family (HTTP 400)
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange
        )
    }

    /// Whether the message should be hidden behind the generic 500 envelope
    #[must_use]
    pub const fn is_unknown_fault(self) -> bool {
        matches!(
            self,
            Self::InternalError | Self::SerializationError | Self::ConfigError
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Clone, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Extra fields flattened into the JSON envelope
    pub details: Map<String, Value>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Attach one extra field to the envelope
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether this is a validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        self.code.is_validation()
    }

    /// Render the flat JSON envelope sent to HTTP clients
    #[must_use]
    pub fn to_envelope(&self) -> ErrorEnvelope {
        if self.code.is_unknown_fault() {
            let mut details = self.details.clone();
            details.insert("message".to_owned(), Value::String(self.message.clone()));
            return ErrorEnvelope {
                error: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
                details,
            };
        }
        ErrorEnvelope {
            error: self.message.clone(),
            details: self.details.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input (type or enumeration mismatch)
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing or empty
    #[must_use]
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Numeric value outside its declared range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found, rendered as "`<resource>` not found"
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unreachable or not configured
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

/// Flat JSON error body: `{"error": "...", ...details}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short error message
    pub error: String,
    /// Additional top-level fields
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::AppError;
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{error, warn};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(code = ?self.code, message = %self.message, "Request failed");
            } else {
                warn!(code = ?self.code, message = %self.message, "Request rejected");
            }
            (status, Json(self.to_envelope())).into_response()
        }
    }
}
