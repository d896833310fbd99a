//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod comment_service;
pub mod person_service;
pub mod place_service;

#[cfg(test)]
mod testing;
