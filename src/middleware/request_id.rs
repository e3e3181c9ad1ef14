// ABOUTME: Request ID middleware for correlating logs with HTTP requests
// ABOUTME: Reuses an incoming x-request-id header or generates a UUID, and echoes it on the response
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Request correlation
//!
//! [`request_id_middleware`] makes a [`RequestId`] available to handlers as an
//! `Extension`, records it on a tracing span for the rest of the request, and
//! copies it onto the response headers.

use crate::constants::env_config::REQUEST_ID_HEADER;
use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Correlation id for one HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh UUID v4 id
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the id as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Attach a request id to the request, its tracing span, and the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map_or_else(RequestId::generate, |value| RequestId(value.to_owned()));

    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
