//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use placebook_domain::error::{CastError, PlacebookError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

/// Maps [`PlacebookError`] and request rejections to an HTTP response with
/// the appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Domain(PlacebookError),
    /// The request body could not be read as JSON.
    Rejected { status: StatusCode, message: String },
}

impl From<PlacebookError> for ApiError {
    fn from(err: PlacebookError) -> Self {
        Self::Domain(err)
    }
}

impl From<CastError> for ApiError {
    fn from(err: CastError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            Self::Domain(PlacebookError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation failed".to_string(),
                errors.errors().iter().map(ToString::to_string).collect(),
            ),
            Self::Domain(PlacebookError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string(), Vec::new())
            }
            Self::Domain(PlacebookError::Cast(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string(), Vec::new())
            }
            Self::Domain(PlacebookError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
            Self::Rejected { status, message } => (status, message, Vec::new()),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use placebook_domain::error::{NotFoundError, ValidationError, ValidationErrors};
    use serde_json::{Value, json};

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_list_every_field_error_when_validation_fails() {
        let err = PlacebookError::Validation(ValidationErrors::new(vec![
            ValidationError::Required { field: "name" },
            ValidationError::AboveMaximum {
                field: "latitude",
                max: 90.0,
            },
        ]));

        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "error": "validation failed",
                "details": ["`name` is required", "`latitude` must be at most 90"],
            })
        );
    }

    #[tokio::test]
    async fn should_map_not_found_without_details() {
        let err = PlacebookError::NotFound(NotFoundError {
            entity: "Person",
            id: "abc".to_string(),
        });

        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Person abc not found" }));
    }

    #[tokio::test]
    async fn should_map_cast_error_to_bad_request() {
        let (status, body) = render(CastError::new("id", "uuid", "nope").into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "cannot cast `id` to uuid: nope");
    }

    #[tokio::test]
    async fn should_hide_storage_error_details() {
        let err = PlacebookError::Storage("disk on fire".into());

        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }
}
