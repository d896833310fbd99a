//! # placebook-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `placebook-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (open, migrate, close)
//! - Map between domain types and database rows
//!
//! Comments are not a table of their own: a place row carries its comment
//! list as JSON and every comment change rewrites that row.
//!
//! ## Dependency rule
//! Depends on `placebook-app` (for port traits) and `placebook-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod person_repo;
mod place_repo;
mod pool;

pub use error::StorageError;
pub use person_repo::SqlitePersonRepository;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
