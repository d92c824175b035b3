//! Demo records loaded at startup.

use chrono::NaiveDate;

use peoplehub_app::ports::{Clock, PersonRepository};
use peoplehub_app::services::person_service::PersonService;
use peoplehub_domain::error::PeopleHubError;
use peoplehub_domain::id::PersonId;
use peoplehub_domain::person::{Person, PersonDraft};

/// `(id, name, birth date, admission date)`
const DEMO_RECORDS: [(u64, &str, &str, &str); 3] = [
    (1, "José da Silva", "2000-04-06", "2020-05-10"),
    (2, "Maria Santos", "1995-08-15", "2019-03-20"),
    (3, "João Oliveira", "1988-12-03", "2021-01-15"),
];

/// Seeding errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A demo date is not a valid ISO date.
    #[error("invalid demo date")]
    Date(#[from] chrono::ParseError),
    /// The service refused a demo record.
    #[error("failed to insert demo record")]
    Person(#[from] PeopleHubError),
}

/// Insert the demo records with their fixed ids.
///
/// # Errors
///
/// Returns [`SeedError::Person`] if a demo id is already taken.
pub async fn demo_records<R, C>(service: &PersonService<R, C>) -> Result<Vec<Person>, SeedError>
where
    R: PersonRepository,
    C: Clock,
{
    let mut seeded = Vec::with_capacity(DEMO_RECORDS.len());
    for (id, name, birth_date, admission_date) in DEMO_RECORDS {
        let draft = PersonDraft::builder()
            .id(PersonId::new(id))
            .name(name)
            .birth_date(birth_date.parse::<NaiveDate>()?)
            .admission_date(admission_date.parse::<NaiveDate>()?)
            .build()?;
        seeded.push(service.create_person(Some(draft)).await?);
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use peoplehub_app::clock::FixedClock;
    use peoplehub_app::store::InMemoryPersonStore;

    fn make_service() -> PersonService<InMemoryPersonStore, FixedClock> {
        PersonService::new(
            InMemoryPersonStore::default(),
            FixedClock(NaiveDate::from_ymd_opt(2023, 2, 7).unwrap()),
        )
    }

    #[tokio::test]
    async fn should_seed_three_records_sorted_by_name() {
        let svc = make_service();
        demo_records(&svc).await.unwrap();

        let names: Vec<String> = svc
            .list_persons()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["João Oliveira", "José da Silva", "Maria Santos"]);
    }

    #[tokio::test]
    async fn should_continue_allocation_after_seeded_ids() {
        let svc = make_service();
        demo_records(&svc).await.unwrap();

        let draft = PersonDraft {
            name: Some("Ana Costa".to_string()),
            ..PersonDraft::default()
        };
        let created = svc.create_person(Some(draft)).await.unwrap();
        assert_eq!(created.id, PersonId::new(4));
    }

    #[tokio::test]
    async fn should_fail_when_seeding_twice() {
        let svc = make_service();
        demo_records(&svc).await.unwrap();
        let result = demo_records(&svc).await;
        assert!(matches!(
            result,
            Err(SeedError::Person(PeopleHubError::Conflict(_)))
        ));
    }
}
