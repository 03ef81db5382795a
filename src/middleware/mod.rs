// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Provides the OPTIONS short-circuit, origin header, request ID generation, and request spans

/// CORS preflight short-circuit and allow-any-origin response header
pub mod cors;
/// Request id generation and propagation plus per-request tracing spans
pub mod tracing;

// CORS handling
pub use cors::{allow_any_origin, preflight};

// Request tracing and correlation
pub use self::tracing::{
    create_request_span, propagate_request_id, set_request_id, trace_layer, REQUEST_ID_HEADER,
};
