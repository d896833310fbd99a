//! # placebook-domain
//!
//! Pure domain model for the placebook API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **People** (named records with birth date and body measurements)
//! - Define **Places** (coordinates, optional owner, embedded comments)
//! - Define **Comments** (sub-records that only exist inside a place)
//! - Cast untyped request fields into typed inputs and validate them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod fields;
pub mod id;
pub mod time;
pub mod validation;

pub mod comment;
pub mod person;
pub mod place;
