//! Middleware removing blank string fields from PATCH bodies.
//!
//! A form that submits `""` for an untouched input must not overwrite the
//! stored value, so `{"person": {"firstName": " ", "lastName": "Doe"}}` is
//! forwarded as `{"person": {"lastName": "Doe"}}`.

use axum::body::{self, Body, Bytes};
use axum::extract::Request;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;

use placebook_domain::fields::strip_blank_fields;

use crate::error::ApiError;

const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Strip blank fields from JSON PATCH bodies; every other request passes
/// through untouched.
///
/// Bodies that are not valid JSON are forwarded as-is so the handler's
/// extractor reports the syntax error.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the body cannot be read.
pub async fn strip_blank_patch_fields(request: Request, next: Next) -> Result<Response, ApiError> {
    if request.method() != Method::PATCH || !is_json(&request) {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|err| ApiError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: err.to_string(),
        })?;

    let stripped = serde_json::from_slice::<Value>(&bytes)
        .ok()
        .and_then(|mut value| {
            strip_blank_fields(&mut value);
            serde_json::to_vec(&value).ok()
        });
    let bytes = stripped.map_or(bytes, Bytes::from);

    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(bytes.len()));
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
