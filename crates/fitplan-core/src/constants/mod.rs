// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Route paths, ports, env keys, tool and agent ids, nutrition and validation constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Tool identifiers exposed on the tool-call surface
pub mod tools;

pub use tools::*;

/// API routes
pub mod routes {
    /// Liveness and agent roster
    pub const HEALTH: &str = "/health";
    /// Chat with a named agent
    pub const CHAT: &str = "/api/chat";
    /// Agent roster listing
    pub const AGENTS: &str = "/api/agents";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// LLM credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// OpenAI-compatible endpoint
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Chat model id
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// LLM connect timeout in seconds
    pub const LLM_CONNECT_TIMEOUT_SECS: &str = "LLM_CONNECT_TIMEOUT_SECS";
    /// LLM request timeout in seconds
    pub const LLM_REQUEST_TIMEOUT_SECS: &str = "LLM_REQUEST_TIMEOUT_SECS";
    /// Log level / filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Service name attached to log records
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}

/// LLM defaults
pub mod llm {
    /// Default OpenAI-compatible base URL
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    /// Default chat model
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    /// Default connect timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
    /// Upper bound on tool-calling round trips for one chat message
    pub const MAX_TOOL_ITERATIONS: usize = 10;
    /// Service label used in upstream error messages
    pub const SERVICE_LABEL: &str = "OpenAI";
}

/// Agent identifiers
pub mod agents {
    /// Key of the built-in fitness and nutrition agent
    pub const BODY_AGENT: &str = "bodyAgent";
    /// Display name of the built-in agent
    pub const BODY_AGENT_DISPLAY_NAME: &str = "Body Agent";
    /// Agent used when a chat request names none
    pub const DEFAULT_AGENT: &str = BODY_AGENT;
}

/// Service identity
pub mod service {
    /// Default service name
    pub const NAME: &str = "fitplan-server";
    /// Message returned by the health endpoint
    pub const HEALTH_MESSAGE: &str = "FitPlan fitness planning server is running";
}

/// Energy and macronutrient constants
pub mod nutrition {
    /// Calories per gram of protein
    pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const CALORIES_PER_GRAM_CARB: f64 = 4.0;
    /// Calories per gram of fat
    pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;
    /// Deficit / surplus applied to TDEE for weight loss and gain targets
    pub const CALORIE_ADJUSTMENT: i64 = 500;

    /// Protein share when gaining
    pub const PROTEIN_RATIO_GAIN: f64 = 0.30;
    /// Protein share otherwise
    pub const PROTEIN_RATIO_DEFAULT: f64 = 0.25;
    /// Carbohydrate share when losing
    pub const CARB_RATIO_LOSE: f64 = 0.35;
    /// Carbohydrate share otherwise
    pub const CARB_RATIO_DEFAULT: f64 = 0.45;

    /// Breakfast share of daily calories
    pub const BREAKFAST_SHARE: f64 = 0.25;
    /// Lunch share of daily calories
    pub const LUNCH_SHARE: f64 = 0.35;
    /// Dinner share of daily calories
    pub const DINNER_SHARE: f64 = 0.30;
    /// Snack share of daily calories
    pub const SNACKS_SHARE: f64 = 0.10;
}

/// Mifflin-St Jeor coefficients in thousandths, so integer inputs are summed exactly
pub mod mifflin_st_jeor {
    /// Male intercept (88.362)
    pub const MALE_BASE_MILLI: i64 = 88_362;
    /// Male weight coefficient per kg (13.397)
    pub const MALE_WEIGHT_MILLI: i64 = 13_397;
    /// Male height coefficient per cm (4.799)
    pub const MALE_HEIGHT_MILLI: i64 = 4_799;
    /// Male age coefficient per year (5.677)
    pub const MALE_AGE_MILLI: i64 = 5_677;
    /// Female intercept (447.593)
    pub const FEMALE_BASE_MILLI: i64 = 447_593;
    /// Female weight coefficient per kg (9.247)
    pub const FEMALE_WEIGHT_MILLI: i64 = 9_247;
    /// Female height coefficient per cm (3.098)
    pub const FEMALE_HEIGHT_MILLI: i64 = 3_098;
    /// Female age coefficient per year (4.330)
    pub const FEMALE_AGE_MILLI: i64 = 4_330;
}

/// Input ranges enforced by the validation layer (inclusive)
pub mod limits {
    /// Minimum height in cm
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Maximum height in cm
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum weight in kg
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum weight in kg
    pub const MAX_WEIGHT_KG: f64 = 200.0;
    /// Minimum age in years
    pub const MIN_AGE_YEARS: f64 = 10.0;
    /// Maximum age in years
    pub const MAX_AGE_YEARS: f64 = 100.0;
    /// Minimum training days per week
    pub const MIN_DAYS_PER_WEEK: u32 = 1;
    /// Maximum training days per week
    pub const MAX_DAYS_PER_WEEK: u32 = 7;
    /// Minimum session length in minutes
    pub const MIN_SESSION_MINUTES: u32 = 15;
    /// Maximum session length in minutes
    pub const MAX_SESSION_MINUTES: u32 = 180;
    /// Session minutes per exercise slot
    pub const MINUTES_PER_EXERCISE: u32 = 15;
}
