//! Request logging middleware
//!
//! Logs every incoming HTTP request with timing and status, and captures
//! the JSON body of mutating requests (POST/PUT/DELETE) at debug level.

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::utils::AppError;

/// Mutating request bodies are buffered for logging; anything larger than
/// this is rejected before it reaches a handler.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Request logging middleware
///
/// Records the following for each request:
/// - Request ID (x-request-id header, or a generated UUID)
/// - HTTP method and matched path
/// - Request body for POST/PUT/DELETE
/// - Response status code
/// - Latency in milliseconds
pub async fn logging_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    let start = Instant::now();

    // Take the request ID from the header, or generate one
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request started"
    );

    // Buffer and log the body of mutating requests, then hand the request
    // back downstream with the body restored
    let req = if is_mutating(&method) {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|_| AppError::invalid("Request body too large or unreadable"))?;

        if !bytes.is_empty() {
            debug!(
                request_id = %request_id,
                method = %method,
                path = %path,
                body = %String::from_utf8_lossy(&bytes),
                "Request body"
            );
        }

        Request::from_parts(parts, Body::from(bytes))
    } else {
        req
    };

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    // Pick the log level from the status class
    if status.is_server_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed with client error"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "Request completed successfully"
        );
    }

    Ok(response)
}

fn is_mutating(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE)
}
