//! Common error types used across the workspace.
//!
//! Each failure kind carries its own typed error and converts into
//! [`PeopleHubError`] via `#[from]`, so callers can match on the kind while
//! adapters decide how to surface it.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum PeopleHubError {
    /// A required field failed structural validation while decoding a payload.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The caller supplied a malformed or unsupported parameter.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameterError),

    /// The referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A record with the same identity already exists.
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// Required-field violations, reported one field at a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be blank")]
    EmptyName,

    #[error("birth date must not be null")]
    MissingBirthDate,

    #[error("admission date must not be null")]
    MissingAdmissionDate,
}

/// Caller errors that cannot be recovered from locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("person payload must not be empty")]
    MissingPayload,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("'{0}' is not a valid person id")]
    InvalidId(String),

    /// No identifier can follow this one, so it cannot be allocated.
    #[error("person id {0} is out of range")]
    IdOutOfRange(String),

    #[error("attribute '{0}' is not valid")]
    UnknownAttribute(String),

    #[error("attribute '{attribute}' expects {expected}")]
    InvalidAttributeValue {
        attribute: String,
        expected: &'static str,
    },

    #[error("query parameter '{0}' is required")]
    MissingQueryParameter(&'static str),

    #[error("unknown age format '{0}', expected one of: days, months, years")]
    UnknownAgeFormat(String),

    #[error("unknown salary format '{0}', expected one of: full, min")]
    UnknownSalaryFormat(String),

    #[error("salary after {years} years of service is out of range")]
    SalaryOutOfRange { years: u32 },

    /// A required field is missing or blank outside of payload decoding.
    #[error(transparent)]
    Field(#[from] ValidationError),
}

/// Lookup of a record that is not present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Insert of a record whose identity is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}
