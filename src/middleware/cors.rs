// ABOUTME: Permissive CORS handling for the HTTP surface
// ABOUTME: Answers OPTIONS on any path and stamps Access-Control-Allow-Origin on every response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitPlan Contributors

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use http::{HeaderValue, Method, StatusCode};
use tower_http::set_header::SetResponseHeaderLayer;

/// Allowed origin on every response
pub const ALLOW_ORIGIN: &str = "*";
/// Methods advertised to preflight requests
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
/// Headers advertised to preflight requests
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Short-circuit every OPTIONS request with an empty 200 carrying the CORS headers.
///
/// Runs before routing, so it applies to unknown paths too.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }
    next.run(request).await
}

fn preflight_response() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN)),
            (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS)),
            (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS)),
        ],
        Body::empty(),
    )
        .into_response()
}

/// Layer adding `Access-Control-Allow-Origin: *` to responses that lack it
#[must_use]
pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    )
}
