//! Person — the record kept by the registry, its payload shape, and the
//! single-attribute patches that can be applied to it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InvalidParameterError, PeopleHubError, ValidationError};
use crate::id::PersonId;
use crate::time::Date;

/// A person stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth_date: Option<Date>,
    pub admission_date: Option<Date>,
}

impl Person {
    /// Materialize a draft under the given identity, ignoring the draft's own id.
    #[must_use]
    pub fn from_draft(id: PersonId, draft: PersonDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            birth_date: draft.birth_date,
            admission_date: draft.admission_date,
        }
    }

    /// Birth date, required by age computations.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBirthDate`] when the date is absent.
    pub fn require_birth_date(&self) -> Result<Date, ValidationError> {
        self.birth_date.ok_or(ValidationError::MissingBirthDate)
    }

    /// Admission date, required by salary computations.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAdmissionDate`] when the date is absent.
    pub fn require_admission_date(&self) -> Result<Date, ValidationError> {
        self.admission_date
            .ok_or(ValidationError::MissingAdmissionDate)
    }

    /// Overwrite the field targeted by `attribute`.
    pub fn apply(&mut self, attribute: PersonAttribute) {
        match attribute {
            PersonAttribute::Name(name) => self.name = name,
            PersonAttribute::BirthDate(date) => self.birth_date = Some(date),
            PersonAttribute::AdmissionDate(date) => self.admission_date = Some(date),
        }
    }
}

/// Create/replace payload: every field is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub id: Option<PersonId>,
    pub name: Option<String>,
    pub birth_date: Option<Date>,
    pub admission_date: Option<Date>,
}

impl PersonDraft {
    /// Create a builder for constructing a [`PersonDraft`].
    #[must_use]
    pub fn builder() -> PersonDraftBuilder {
        PersonDraftBuilder::default()
    }

    /// Check required fields, reporting the first one that fails.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first offending field, checked
    /// in the order name, birth date, admission date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(ValidationError::EmptyName);
        }
        if self.birth_date.is_none() {
            return Err(ValidationError::MissingBirthDate);
        }
        if self.admission_date.is_none() {
            return Err(ValidationError::MissingAdmissionDate);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`PersonDraft`].
#[derive(Debug, Default)]
pub struct PersonDraftBuilder {
    draft: PersonDraft,
}

impl PersonDraftBuilder {
    #[must_use]
    pub fn id(mut self, id: PersonId) -> Self {
        self.draft.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: Date) -> Self {
        self.draft.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn admission_date(mut self, admission_date: Date) -> Self {
        self.draft.admission_date = Some(admission_date);
        self
    }

    /// Consume the builder, validate, and return a [`PersonDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::Validation`] if a required field is missing.
    pub fn build(self) -> Result<PersonDraft, PeopleHubError> {
        self.draft.validate()?;
        Ok(self.draft)
    }
}

/// A single validated field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonAttribute {
    Name(String),
    BirthDate(Date),
    AdmissionDate(Date),
}

impl PersonAttribute {
    /// Accepted attribute names, matched case-insensitively.
    pub const NAMES: [&'static str; 3] = ["name", "birthDate", "admissionDate"];

    /// Resolve `attribute` and validate `value` for it.
    ///
    /// A `null` date is rejected here rather than stored, so the record is
    /// never left without a date it had before.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError::UnknownAttribute`] for names outside
    /// [`Self::NAMES`], [`InvalidParameterError::Field`] for a blank name or a
    /// `null` date, and [`InvalidParameterError::InvalidAttributeValue`] when
    /// the value has the wrong shape.
    pub fn parse(attribute: &str, value: &Value) -> Result<Self, InvalidParameterError> {
        match attribute.to_lowercase().as_str() {
            "name" => match value {
                Value::String(name) if !name.trim().is_empty() => Ok(Self::Name(name.clone())),
                Value::String(_) | Value::Null => Err(ValidationError::EmptyName.into()),
                _ => Err(InvalidParameterError::InvalidAttributeValue {
                    attribute: attribute.to_string(),
                    expected: "a string",
                }),
            },
            "birthdate" => parse_date(attribute, value, ValidationError::MissingBirthDate)
                .map(Self::BirthDate),
            "admissiondate" => {
                parse_date(attribute, value, ValidationError::MissingAdmissionDate)
                    .map(Self::AdmissionDate)
            }
            _ => Err(InvalidParameterError::UnknownAttribute(attribute.to_string())),
        }
    }
}

fn parse_date(
    attribute: &str,
    value: &Value,
    when_null: ValidationError,
) -> Result<Date, InvalidParameterError> {
    let invalid = || InvalidParameterError::InvalidAttributeValue {
        attribute: attribute.to_string(),
        expected: "an ISO date (YYYY-MM-DD)",
    };
    match value {
        Value::Null => Err(when_null.into()),
        Value::String(raw) => raw.parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
