// ABOUTME: Core types and constants for the FitPlan fitness planning service
// ABOUTME: Foundation crate with error handling, JSON error envelopes, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

#![deny(unsafe_code)]

//! # FitPlan Core
//!
//! Foundation crate providing shared types and constants for the FitPlan
//! service. Both the planning engine and the HTTP server depend on it, so it
//! is kept small and changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Route paths, tool and agent identifiers, nutrition constants

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
