//! Person service — use-cases for managing persons and their derived values.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use peoplehub_domain::age::AgeFormat;
use peoplehub_domain::error::{InvalidParameterError, PeopleHubError};
use peoplehub_domain::id::PersonId;
use peoplehub_domain::person::{Person, PersonAttribute, PersonDraft};
use peoplehub_domain::salary::{SalaryFormat, SalaryPolicy};

use crate::ports::{Clock, PersonRepository};

/// Application service validating requests before they reach the store.
pub struct PersonService<R, C> {
    repo: R,
    clock: C,
    salary_policy: SalaryPolicy,
}

impl<R, C> PersonService<R, C>
where
    R: PersonRepository,
    C: Clock,
{
    /// Create a new service backed by the given repository and clock.
    pub fn new(repo: R, clock: C) -> Self {
        Self {
            repo,
            clock,
            salary_policy: SalaryPolicy::REFERENCE,
        }
    }

    /// List all persons ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list_persons(&self) -> Result<Vec<Person>, PeopleHubError> {
        self.repo.list().await
    }

    /// Look up a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, PeopleHubError> {
        self.repo.get(id).await
    }

    /// Create a person, allocating an id when the draft has none.
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::InvalidParameter`] when `draft` is absent and
    /// [`PeopleHubError::Conflict`] when its id is already taken.
    pub async fn create_person(
        &self,
        draft: Option<PersonDraft>,
    ) -> Result<Person, PeopleHubError> {
        let draft = draft.ok_or(InvalidParameterError::MissingPayload)?;
        let person = self.repo.insert(draft).await?;
        tracing::debug!(person_id = %person.id, "person created");
        Ok(person)
    }

    /// Replace the whole record stored under `id`.
    ///
    /// The stored id is always `id`, whatever the draft carries.
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists.
    pub async fn update_person(
        &self,
        id: PersonId,
        mut draft: PersonDraft,
    ) -> Result<Person, PeopleHubError> {
        self.repo.get(id).await?;
        draft.id = Some(id);
        let person = self.repo.replace(id, draft).await?;
        tracing::debug!(person_id = %id, "person replaced");
        Ok(person)
    }

    /// Set a single attribute, matched case-insensitively against
    /// `name`, `birthDate` and `admissionDate`.
    ///
    /// The value is validated before it is written, so a rejected value
    /// leaves the record as it was.
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists,
    /// or [`PeopleHubError::InvalidParameter`] for an unknown attribute or an
    /// invalid value.
    pub async fn patch_attribute(
        &self,
        id: PersonId,
        attribute: &str,
        value: &Value,
    ) -> Result<Person, PeopleHubError> {
        let person = self
            .repo
            .modify(id, |person| {
                person.apply(PersonAttribute::parse(attribute, value)?);
                Ok(())
            })
            .await?;
        tracing::debug!(person_id = %id, attribute, "person attribute patched");
        Ok(person)
    }

    /// Apply every attribute of `attributes` in iteration order.
    ///
    /// Each attribute is committed on its own: the first failure aborts the
    /// remaining ones but keeps those already applied.
    ///
    /// # Errors
    ///
    /// Returns the error of the first attribute that fails, or
    /// [`PeopleHubError::NotFound`] when no person with `id` exists.
    pub async fn patch_attributes(
        &self,
        id: PersonId,
        attributes: &Map<String, Value>,
    ) -> Result<Person, PeopleHubError> {
        for (attribute, value) in attributes {
            self.patch_attribute(id, attribute, value).await?;
        }
        self.repo.get(id).await
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), PeopleHubError> {
        self.repo.remove(id).await?;
        tracing::debug!(person_id = %id, "person removed");
        Ok(())
    }

    /// Age of the person in the unit named by `format`
    /// (`days`, `months` or `years`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists,
    /// or [`PeopleHubError::InvalidParameter`] when the birth date is missing
    /// or `format` is unknown.
    pub async fn compute_age(&self, id: PersonId, format: &str) -> Result<i64, PeopleHubError> {
        let person = self.repo.get(id).await?;
        let birth_date = person
            .require_birth_date()
            .map_err(InvalidParameterError::from)?;
        let format: AgeFormat = format.parse()?;
        Ok(format.compute(birth_date, self.clock.today()))
    }

    /// Current salary of the person in the shape named by `format`
    /// (`full` or `min`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`PeopleHubError::NotFound`] when no person with `id` exists,
    /// or [`PeopleHubError::InvalidParameter`] when the admission date is
    /// missing, `format` is unknown, or the salary overflows.
    pub async fn compute_salary(
        &self,
        id: PersonId,
        format: &str,
    ) -> Result<Decimal, PeopleHubError> {
        let person = self.repo.get(id).await?;
        let admission_date = person
            .require_admission_date()
            .map_err(InvalidParameterError::from)?;
        let format: SalaryFormat = format.parse()?;
        let salary = self
            .salary_policy
            .current_salary(admission_date, self.clock.today())?;
        Ok(format.apply(salary, self.salary_policy.minimum_wage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::InMemoryPersonStore;
    use chrono::NaiveDate;
    use peoplehub_domain::error::ValidationError;
    use peoplehub_domain::time::Date;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_service() -> PersonService<InMemoryPersonStore, FixedClock> {
        PersonService::new(
            InMemoryPersonStore::default(),
            FixedClock(date(2023, 2, 7)),
        )
    }

    fn jose() -> PersonDraft {
        PersonDraft::builder()
            .id(PersonId::new(1))
            .name("José da Silva")
            .birth_date(date(2000, 4, 6))
            .admission_date(date(2020, 5, 10))
            .build()
            .unwrap()
    }

    async fn seeded_service() -> PersonService<InMemoryPersonStore, FixedClock> {
        let svc = make_service();
        svc.create_person(Some(jose())).await.unwrap();
        svc
    }

    #[tokio::test]
    async fn should_reject_create_when_payload_absent() {
        let svc = make_service();
        let result = svc.create_person(None).await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::MissingPayload
            ))
        ));
        assert!(svc.list_persons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_create_with_next_id_when_unset() {
        let svc = seeded_service().await;
        let mut draft = jose();
        draft.id = None;
        draft.name = Some("Ana Costa".to_string());

        let created = svc.create_person(Some(draft)).await.unwrap();
        assert_eq!(created.id, PersonId::new(2));
        assert_eq!(svc.list_persons().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_conflict_on_duplicate_id() {
        let svc = seeded_service().await;
        let result = svc.create_person(Some(jose())).await;
        assert!(matches!(result, Err(PeopleHubError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_roundtrip_update_with_forced_id() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        let mut draft = jose();
        draft.id = Some(PersonId::new(50));
        draft.name = Some("José Silva Jr.".to_string());

        let updated = svc.update_person(id, draft.clone()).await.unwrap();
        let fetched = svc.get_person(id).await.unwrap();

        assert_eq!(fetched, updated);
        assert_eq!(fetched, Person::from_draft(id, draft));
        assert!(svc.get_person(PersonId::new(50)).await.is_err());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_person() {
        let svc = make_service();
        let result = svc.update_person(PersonId::new(9), jose()).await;
        assert!(matches!(result, Err(PeopleHubError::NotFound(_))));
        assert!(svc.list_persons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_patch_single_attribute_case_insensitively() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);

        let patched = svc
            .patch_attribute(id, "BIRTHDATE", &json!("1999-12-31"))
            .await
            .unwrap();
        assert_eq!(patched.birth_date, Some(date(1999, 12, 31)));
        assert_eq!(patched.name, "José da Silva");
    }

    #[tokio::test]
    async fn should_leave_record_unchanged_when_attribute_unknown() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        let before = svc.get_person(id).await.unwrap();

        let result = svc.patch_attribute(id, "email", &json!("x@y.z")).await;
        let Err(PeopleHubError::InvalidParameter(err)) = &result else {
            panic!("expected invalid parameter, got {result:?}");
        };
        assert!(err.to_string().contains("email"));
        assert_eq!(svc.get_person(id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn should_reject_blank_name_patch_without_writing_it() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);

        let result = svc.patch_attribute(id, "name", &json!(" ")).await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(InvalidParameterError::Field(
                ValidationError::EmptyName
            )))
        ));
        assert_eq!(svc.get_person(id).await.unwrap().name, "José da Silva");
    }

    #[tokio::test]
    async fn should_report_not_found_before_unknown_attribute() {
        let svc = make_service();
        let result = svc
            .patch_attribute(PersonId::new(1), "email", &json!("x"))
            .await;
        assert!(matches!(result, Err(PeopleHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_keep_earlier_attributes_when_later_one_fails() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        let Value::Object(attributes) = json!({
            "name": "José Santos",
            "nickname": "Zé",
            "admissionDate": "2021-01-01",
        }) else {
            unreachable!();
        };

        let result = svc.patch_attributes(id, &attributes).await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::UnknownAttribute(_)
            ))
        ));

        let stored = svc.get_person(id).await.unwrap();
        assert_eq!(stored.name, "José Santos");
        assert_eq!(stored.admission_date, Some(date(2020, 5, 10)));
    }

    #[tokio::test]
    async fn should_apply_all_attributes_and_return_result() {
        let svc = seeded_service().await;
        let Value::Object(attributes) = json!({
            "name": "José Santos",
            "admissionDate": "2021-01-01",
        }) else {
            unreachable!();
        };

        let patched = svc
            .patch_attributes(PersonId::new(1), &attributes)
            .await
            .unwrap();
        assert_eq!(patched.name, "José Santos");
        assert_eq!(patched.admission_date, Some(date(2021, 1, 1)));
    }

    #[tokio::test]
    async fn should_delete_person() {
        let svc = seeded_service().await;
        svc.delete_person(PersonId::new(1)).await.unwrap();

        let result = svc.get_person(PersonId::new(1)).await;
        assert!(matches!(result, Err(PeopleHubError::NotFound(_))));
        let result = svc.delete_person(PersonId::new(1)).await;
        assert!(matches!(result, Err(PeopleHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_compute_reference_age() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        assert_eq!(svc.compute_age(id, "days").await.unwrap(), 8342);
        assert_eq!(svc.compute_age(id, "Months").await.unwrap(), 274);
        assert_eq!(svc.compute_age(id, "YEARS").await.unwrap(), 22);
    }

    #[tokio::test]
    async fn should_reject_unknown_age_format() {
        let svc = seeded_service().await;
        let result = svc.compute_age(PersonId::new(1), "weeks").await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::UnknownAgeFormat(_)
            ))
        ));
    }

    #[tokio::test]
    async fn should_require_birth_date_for_age() {
        let svc = make_service();
        let draft = PersonDraft {
            name: Some("Sem Data".to_string()),
            ..PersonDraft::default()
        };
        let created = svc.create_person(Some(draft)).await.unwrap();

        let result = svc.compute_age(created.id, "days").await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(InvalidParameterError::Field(
                ValidationError::MissingBirthDate
            )))
        ));
        let result = svc.compute_salary(created.id, "full").await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(InvalidParameterError::Field(
                ValidationError::MissingAdmissionDate
            )))
        ));
    }

    #[tokio::test]
    async fn should_compute_reference_salary() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        assert_eq!(svc.compute_salary(id, "full").await.unwrap(), dec!(3259.36));
        assert_eq!(svc.compute_salary(id, "MIN").await.unwrap(), dec!(2.51));
    }

    #[tokio::test]
    async fn should_return_base_salary_for_zero_tenure() {
        let svc = seeded_service().await;
        let id = PersonId::new(1);
        svc.patch_attribute(id, "admissionDate", &json!("2023-02-07"))
            .await
            .unwrap();
        assert_eq!(svc.compute_salary(id, "full").await.unwrap(), dec!(1558.00));
    }

    #[tokio::test]
    async fn should_reject_unknown_salary_format() {
        let svc = seeded_service().await;
        let result = svc.compute_salary(PersonId::new(1), "net").await;
        assert!(matches!(
            result,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::UnknownSalaryFormat(_)
            ))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_derived_values_of_missing_person() {
        let svc = make_service();
        let id = PersonId::new(42);
        assert!(matches!(
            svc.compute_age(id, "days").await,
            Err(PeopleHubError::NotFound(_))
        ));
        assert!(matches!(
            svc.compute_salary(id, "full").await,
            Err(PeopleHubError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_report_unknown_salary_format_before_overflow() {
        let svc = make_service();
        let draft = PersonDraft::builder()
            .name("Matusalém")
            .birth_date(date(980, 1, 1))
            .admission_date(date(1000, 1, 1))
            .build()
            .unwrap();
        let id = svc.create_person(Some(draft)).await.unwrap().id;

        assert!(matches!(
            svc.compute_salary(id, "net").await,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::UnknownSalaryFormat(_)
            ))
        ));
        assert!(matches!(
            svc.compute_salary(id, "full").await,
            Err(PeopleHubError::InvalidParameter(
                InvalidParameterError::SalaryOutOfRange { .. }
            ))
        ));
    }
}
