//! # peoplehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — keyed storage with identity allocation
//!   - `Clock` — source of the "as-of" date for derived values
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService` — create, replace, patch, remove, age, salary
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the in-memory person store, system and fixed clocks)
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `peoplehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
pub mod store;
