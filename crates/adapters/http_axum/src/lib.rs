//! # peoplehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** under `/person`
//!   (CRUD, attribute patches, `/age` and `/salary` derived values)
//! - Decode request bodies into domain drafts and attribute maps, running the
//!   structural checks on required fields
//! - Map application results into HTTP responses, and application errors into
//!   status codes with a `{"error": "..."}` body
//!
//! ## Dependency rule
//! Depends on `peoplehub-app` (for port traits and services) and
//! `peoplehub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
