//! # placebook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — CRUD for people, plus the owner projection
//!   - `PlaceRepository` — CRUD for places; saving a place saves its comments
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService` — list, get, create, update, delete
//!   - `PlaceService` — the same, with owner expansion on reads
//!   - `CommentService` — comment operations through the owning place
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `placebook-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
