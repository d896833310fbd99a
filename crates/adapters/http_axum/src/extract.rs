//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use crate::error::ApiError;

/// An untyped JSON request body.
///
/// Field casting happens in the domain layer, so the body is kept as a raw
/// [`Value`]. Rejections are reported with the API error body.
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
