//! JSON REST handlers for persons.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use peoplehub_app::ports::{Clock, PersonRepository};
use peoplehub_domain::error::{InvalidParameterError, PeopleHubError};
use peoplehub_domain::id::PersonId;
use peoplehub_domain::person::{Person, PersonDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the derived-value endpoints.
#[derive(Deserialize)]
pub struct OutputQuery {
    pub output: Option<String>,
}

impl OutputQuery {
    fn output(&self) -> Result<&str, ApiError> {
        self.output
            .as_deref()
            .ok_or_else(|| InvalidParameterError::MissingQueryParameter("output").into())
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single person.
pub enum PersonResponse {
    Ok(Json<Person>),
    Created(Json<Person>),
}

impl IntoResponse for PersonResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    raw.parse()
        .map_err(|_| InvalidParameterError::InvalidId(raw.to_string()).into())
}

fn malformed(err: &serde_json::Error) -> ApiError {
    InvalidParameterError::MalformedPayload(err.to_string()).into()
}

/// Decode a create/replace body.
///
/// An empty body or a JSON `null` decodes to `None`. A present draft must
/// carry every required field.
fn decode_draft(body: &[u8]) -> Result<Option<PersonDraft>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let draft: Option<PersonDraft> = serde_json::from_slice(body).map_err(|err| malformed(&err))?;
    if let Some(draft) = &draft {
        draft.validate().map_err(PeopleHubError::from)?;
    }
    Ok(draft)
}

/// `GET /person`
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> Result<ListResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let persons = state.person_service.list_persons().await?;
    Ok(ListResponse::Ok(Json(persons)))
}

/// `GET /person/:id`
pub async fn get<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<PersonResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let person = state.person_service.get_person(parse_id(&id)?).await?;
    Ok(PersonResponse::Ok(Json(person)))
}

/// `POST /person`
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    body: Bytes,
) -> Result<PersonResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let draft = decode_draft(&body)?;
    let created = state.person_service.create_person(draft).await?;
    Ok(PersonResponse::Created(Json(created)))
}

/// `PUT /person/:id`
pub async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<PersonResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let draft = decode_draft(&body)?.ok_or(InvalidParameterError::MissingPayload)?;
    let updated = state.person_service.update_person(id, draft).await?;
    Ok(PersonResponse::Ok(Json(updated)))
}

/// `PATCH /person/:id`
pub async fn patch<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<PersonResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let attributes: Map<String, Value> =
        serde_json::from_slice(&body).map_err(|err| malformed(&err))?;
    let patched = state
        .person_service
        .patch_attributes(id, &attributes)
        .await?;
    Ok(PersonResponse::Ok(Json(patched)))
}

/// `DELETE /person/:id`
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.person_service.delete_person(parse_id(&id)?).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /person/:id/age?output=days|months|years`
pub async fn age<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    Query(query): Query<OutputQuery>,
) -> Result<Json<i64>, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let age = state
        .person_service
        .compute_age(parse_id(&id)?, query.output()?)
        .await?;
    Ok(Json(age))
}

/// `GET /person/:id/salary?output=full|min`
pub async fn salary<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<String>,
    Query(query): Query<OutputQuery>,
) -> Result<Json<Decimal>, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let salary = state
        .person_service
        .compute_salary(parse_id(&id)?, query.output()?)
        .await?;
    Ok(Json(salary))
}
