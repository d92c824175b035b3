//! Shared application state for axum handlers.

use std::sync::Arc;

use peoplehub_app::ports::{Clock, PersonRepository};
use peoplehub_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and clock types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R, C> {
    /// Person CRUD and derived-value service.
    pub person_service: Arc<PersonService<R, C>>,
}

impl<R, C> Clone for AppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(person_service: PersonService<R, C>) -> Self {
        Self::from_arc(Arc::new(person_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// for example to seed records at startup.
    pub fn from_arc(person_service: Arc<PersonService<R, C>>) -> Self {
        Self { person_service }
    }
}
