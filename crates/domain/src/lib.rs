//! # peoplehub-domain
//!
//! Pure domain model for the peoplehub person registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates
//! - Define **Persons** (name, birth date, admission date) and their drafts
//! - Define **attribute patches** applied one field at a time
//! - Define **collation** used to order persons by name for a given locale
//! - Define the **age** strategies (`days`, `months`, `years`)
//! - Define the **salary** accrual model and its output strategies (`full`, `min`)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod age;
pub mod collation;
pub mod person;
pub mod salary;
