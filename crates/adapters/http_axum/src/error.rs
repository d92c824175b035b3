//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use peoplehub_domain::error::{InvalidParameterError, PeopleHubError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PeopleHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PeopleHubError);

impl From<PeopleHubError> for ApiError {
    fn from(err: PeopleHubError) -> Self {
        Self(err)
    }
}

impl From<InvalidParameterError> for ApiError {
    fn from(err: InvalidParameterError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            PeopleHubError::Validation(_) | PeopleHubError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            PeopleHubError::NotFound(_) => StatusCode::NOT_FOUND,
            PeopleHubError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self.0, "request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
