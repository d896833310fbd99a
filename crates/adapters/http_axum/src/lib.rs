//! # placebook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for people, places and the comments nested in a
//!   place (`/people`, `/places`, `/comments/{place_id}/…`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//! - Strip blank string fields from PATCH bodies before they reach a handler
//! - Restrict cross-origin access to one configured client origin
//!
//! ## Dependency rule
//! Depends on `placebook-app` (for port traits and services) and
//! `placebook-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod blank;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
pub mod views;
