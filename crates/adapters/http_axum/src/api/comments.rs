//! JSON REST handlers for comments nested under a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use placebook_app::ports::{PersonRepository, PlaceRepository};
use placebook_domain::comment::{Comment, CommentInput};
use placebook_domain::error::PlacebookError;
use placebook_domain::fields::Fields;
use placebook_domain::id::{CommentId, PlaceId};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::views::PlaceEnvelope;

const ENVELOPE: &str = "comment";

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Comment>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
///
/// Creating a comment answers with the whole updated place.
pub enum CreateResponse {
    Created(Json<PlaceEnvelope>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_input(body: Value) -> Result<CommentInput, PlacebookError> {
    let fields = Fields::from_envelope(body, ENVELOPE)?;
    Ok(CommentInput::from_fields(&fields)?)
}

fn parse_ids(place_id: &str, comment_id: &str) -> Result<(PlaceId, CommentId), ApiError> {
    Ok((
        PlaceId::parse_field("placeId", place_id)?,
        CommentId::parse_field("commentId", comment_id)?,
    ))
}

/// `GET /comments/{place_id}/{comment_id}`
pub async fn get<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path((place_id, comment_id)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let (place_id, comment_id) = parse_ids(&place_id, &comment_id)?;
    let comment = state
        .comment_service
        .get_comment(place_id, comment_id)
        .await?;
    Ok(GetResponse::Ok(Json(comment)))
}

/// `POST /comments/{place_id}`
pub async fn create<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(place_id): Path<String>,
    Payload(body): Payload,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = PlaceId::parse_field("placeId", &place_id)?;
    let input = parse_input(body)?;
    let place = state.comment_service.add_comment(place_id, input).await?;
    Ok(CreateResponse::Created(Json(PlaceEnvelope {
        place: place.into(),
    })))
}

/// `PATCH /comments/{place_id}/{comment_id}`
pub async fn update<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path((place_id, comment_id)): Path<(String, String)>,
    Payload(body): Payload,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let (place_id, comment_id) = parse_ids(&place_id, &comment_id)?;
    let input = parse_input(body)?;
    state
        .comment_service
        .update_comment(place_id, comment_id, input)
        .await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /comments/{place_id}/{comment_id}`
pub async fn delete<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path((place_id, comment_id)): Path<(String, String)>,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let (place_id, comment_id) = parse_ids(&place_id, &comment_id)?;
    state
        .comment_service
        .delete_comment(place_id, comment_id)
        .await?;
    Ok(NoContentResponse::NoContent)
}
