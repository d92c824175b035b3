//! Storage port — repository trait for person records.

use std::future::Future;

use peoplehub_domain::error::PeopleHubError;
use peoplehub_domain::id::PersonId;
use peoplehub_domain::person::{Person, PersonDraft};

/// Repository owning person records and their identity allocation.
///
/// Implementations must make every method atomic with respect to the others.
pub trait PersonRepository {
    /// Insert a new person.
    ///
    /// Drafts without an id receive the next free one. Drafts carrying an id
    /// keep it, and the allocator is moved past it so later automatic ids
    /// never collide.
    ///
    /// Fails with [`PeopleHubError::Conflict`] when the id is already taken.
    fn insert(
        &self,
        draft: PersonDraft,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send;

    /// Get a person by id.
    ///
    /// Fails with [`PeopleHubError::NotFound`] when no record has that id.
    fn get(&self, id: PersonId) -> impl Future<Output = Result<Person, PeopleHubError>> + Send;

    /// All persons, ordered by name under the repository's collation.
    fn list(&self) -> impl Future<Output = Result<Vec<Person>, PeopleHubError>> + Send;

    /// Overwrite the whole record stored under `id`, forcing its id to `id`.
    ///
    /// Fails with [`PeopleHubError::NotFound`] when no record has that id.
    fn replace(
        &self,
        id: PersonId,
        draft: PersonDraft,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send;

    /// Run `change` against a copy of the record and commit it only on success.
    ///
    /// Fails with [`PeopleHubError::NotFound`] when no record has that id, or
    /// with whatever error `change` returns, leaving the record untouched.
    fn modify<F>(
        &self,
        id: PersonId,
        change: F,
    ) -> impl Future<Output = Result<Person, PeopleHubError>> + Send
    where
        F: FnOnce(&mut Person) -> Result<(), PeopleHubError> + Send;

    /// Delete a person by id, returning the removed record.
    ///
    /// Fails with [`PeopleHubError::NotFound`] when no record has that id.
    fn remove(&self, id: PersonId) -> impl Future<Output = Result<Person, PeopleHubError>> + Send;
}
