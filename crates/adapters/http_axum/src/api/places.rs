//! JSON REST handlers for places.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use placebook_app::ports::{PersonRepository, PlaceRepository};
use placebook_domain::error::PlacebookError;
use placebook_domain::fields::Fields;
use placebook_domain::id::PlaceId;
use placebook_domain::place::PlaceInput;

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::views::{PlaceEnvelope, PlacesEnvelope};

const ENVELOPE: &str = "place";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<PlacesEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PlaceEnvelope>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
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

fn parse_input(body: Value) -> Result<PlaceInput, PlacebookError> {
    let fields = Fields::from_envelope(body, ENVELOPE)?;
    Ok(PlaceInput::from_fields(&fields)?)
}

/// `GET /places`
///
/// Each place carries its owner as `{id, firstName, lastName}`.
pub async fn list<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    Ok(ListResponse::Ok(Json(PlacesEnvelope {
        places: places.into_iter().map(Into::into).collect(),
    })))
}

/// `GET /places/{id}`
pub async fn get<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = PlaceId::parse_field("id", &id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(PlaceEnvelope {
        place: place.into(),
    })))
}

/// `POST /places`
pub async fn create<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Payload(body): Payload,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let input = parse_input(body)?;
    let created = state.place_service.create_place(input).await?;
    Ok(CreateResponse::Created(Json(PlaceEnvelope {
        place: created.into(),
    })))
}

/// `PATCH /places/{id}`
pub async fn update<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
    Payload(body): Payload,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = PlaceId::parse_field("id", &id)?;
    let input = parse_input(body)?;
    state.place_service.update_place(place_id, input).await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /places/{id}`
pub async fn delete<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let place_id = PlaceId::parse_field("id", &id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(NoContentResponse::NoContent)
}
