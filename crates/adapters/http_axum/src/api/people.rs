//! JSON REST handlers for people.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use placebook_app::ports::{PersonRepository, PlaceRepository};
use placebook_domain::error::PlacebookError;
use placebook_domain::fields::Fields;
use placebook_domain::id::PersonId;
use placebook_domain::person::PersonInput;

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;
use crate::views::{PeopleEnvelope, PersonEnvelope};

const ENVELOPE: &str = "person";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<PeopleEnvelope>),
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
    Ok(Json<PersonEnvelope>),
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
    Created(Json<PersonEnvelope>),
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

fn parse_input(body: Value) -> Result<PersonInput, PlacebookError> {
    let fields = Fields::from_envelope(body, ENVELOPE)?;
    Ok(PersonInput::from_fields(&fields)?)
}

/// `GET /people`
pub async fn list<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let people = state.person_service.list_people().await?;
    Ok(ListResponse::Ok(Json(PeopleEnvelope {
        people: people.into_iter().map(Into::into).collect(),
    })))
}

/// `GET /people/{id}`
pub async fn get<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let person_id = PersonId::parse_field("id", &id)?;
    let person = state.person_service.get_person(person_id).await?;
    Ok(GetResponse::Ok(Json(PersonEnvelope {
        person: person.into(),
    })))
}

/// `POST /people`
pub async fn create<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Payload(body): Payload,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let input = parse_input(body)?;
    let created = state.person_service.create_person(input).await?;
    Ok(CreateResponse::Created(Json(PersonEnvelope {
        person: created.into(),
    })))
}

/// `PATCH /people/{id}`
pub async fn update<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
    Payload(body): Payload,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let person_id = PersonId::parse_field("id", &id)?;
    let input = parse_input(body)?;
    state.person_service.update_person(person_id, input).await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /people/{id}`
pub async fn delete<PR, PLR>(
    State(state): State<AppState<PR, PLR>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    let person_id = PersonId::parse_field("id", &id)?;
    state.person_service.delete_person(person_id).await?;
    Ok(NoContentResponse::NoContent)
}
