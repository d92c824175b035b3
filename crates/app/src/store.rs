//! In-memory [`PersonRepository`] backed by a single mutex.
//!
//! The map and the id allocator live behind the same lock, so identity
//! allocation and record mutation can never interleave.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use peoplehub_domain::collation::Collator;
use peoplehub_domain::error::{
    ConflictError, InvalidParameterError, NotFoundError, PeopleHubError,
};
use peoplehub_domain::id::PersonId;
use peoplehub_domain::person::{Person, PersonDraft};

use crate::ports::PersonRepository;

const ENTITY: &str = "Person";

#[derive(Debug)]
struct Records {
    by_id: HashMap<PersonId, Person>,
    /// Strictly greater than every id ever stored.
    next_id: PersonId,
}

/// Process-local person store.
#[derive(Debug)]
pub struct InMemoryPersonStore {
    records: Mutex<Records>,
    collator: Collator,
}

impl Default for InMemoryPersonStore {
    fn default() -> Self {
        Self::new(Collator::default())
    }
}

impl InMemoryPersonStore {
    /// Create an empty store listing names with `collator`.
    #[must_use]
    pub fn new(collator: Collator) -> Self {
        Self {
            records: Mutex::new(Records {
                by_id: HashMap::new(),
                next_id: PersonId::new(1),
            }),
            collator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        // Every critical section leaves the records consistent before it can
        // panic, so a poisoned lock still guards valid data.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert_record(&self, draft: PersonDraft) -> Result<Person, PeopleHubError> {
        let mut guard = self.lock();
        let records = &mut *guard;
        let id = draft.id.unwrap_or(records.next_id);
        // Taking an id must leave room for a strictly greater counter.
        let successor = id.successor().ok_or_else(|| out_of_range(id))?;
        let Entry::Vacant(slot) = records.by_id.entry(id) else {
            return Err(ConflictError {
                entity: ENTITY,
                id: id.to_string(),
            }
            .into());
        };
        let person = Person::from_draft(id, draft);
        slot.insert(person.clone());
        if successor > records.next_id {
            records.next_id = successor;
        }
        Ok(person)
    }

    fn get_record(&self, id: PersonId) -> Result<Person, PeopleHubError> {
        self.lock()
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn list_records(&self) -> Vec<Person> {
        let mut persons: Vec<Person> = self.lock().by_id.values().cloned().collect();
        persons.sort_by(|a, b| {
            self.collator
                .compare(&a.name, &b.name)
                .then_with(|| a.id.cmp(&b.id))
        });
        persons
    }

    fn replace_record(&self, id: PersonId, draft: PersonDraft) -> Result<Person, PeopleHubError> {
        let mut records = self.lock();
        match records.by_id.entry(id) {
            Entry::Occupied(mut slot) => {
                let person = Person::from_draft(id, draft);
                slot.insert(person.clone());
                Ok(person)
            }
            Entry::Vacant(_) => Err(not_found(id)),
        }
    }

    fn modify_record<F>(&self, id: PersonId, change: F) -> Result<Person, PeopleHubError>
    where
        F: FnOnce(&mut Person) -> Result<(), PeopleHubError>,
    {
        let mut records = self.lock();
        let stored = records.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        let mut working = stored.clone();
        change(&mut working)?;
        working.id = id;
        stored.clone_from(&working);
        Ok(working)
    }

    fn remove_record(&self, id: PersonId) -> Result<Person, PeopleHubError> {
        self.lock().by_id.remove(&id).ok_or_else(|| not_found(id))
    }
}

fn out_of_range(id: PersonId) -> PeopleHubError {
    InvalidParameterError::IdOutOfRange(id.to_string()).into()
}

fn not_found(id: PersonId) -> PeopleHubError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

impl PersonRepository for InMemoryPersonStore {
    fn insert(
        &self,
        draft: PersonDraft,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send {
        let result = self.insert_record(draft);
        async move { result }
    }

    fn get(&self, id: PersonId) -> impl Future<Output = Result<Person, PeopleHubError>> + Send {
        let result = self.get_record(id);
        async move { result }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Person>, PeopleHubError>> + Send {
        let persons = self.list_records();
        async move { Ok(persons) }
    }

    fn replace(
        &self,
        id: PersonId,
        draft: PersonDraft,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send {
        let result = self.replace_record(id, draft);
        async move { result }
    }

    fn modify<F>(
        &self,
        id: PersonId,
        change: F,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send
    where
        F: FnOnce(&mut Person) -> Result<(), PeopleHubError> + Send,
    {
        let result = self.modify_record(id, change);
        async move { result }
    }

    fn remove(&self, id: PersonId) -> impl Future<Output = Result<Person, PeopleHubError>> + Send {
        let result = self.remove_record(id);
        async move { result }
    }
}
