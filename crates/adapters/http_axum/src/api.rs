//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod persons;

use axum::Router;
use axum::routing::get;

use peoplehub_app::ports::{Clock, PersonRepository};

use crate::state::AppState;

/// Build the `/person` routes.
pub fn routes<R, C>() -> Router<AppState<R, C>>
where
    R: PersonRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/person",
            get(persons::list::<R, C>).post(persons::create::<R, C>),
        )
        .route(
            "/person/{id}",
            get(persons::get::<R, C>)
                .put(persons::update::<R, C>)
                .patch(persons::patch::<R, C>)
                .delete(persons::delete::<R, C>),
        )
        .route("/person/{id}/age", get(persons::age::<R, C>))
        .route("/person/{id}/salary", get(persons::salary::<R, C>))
}
