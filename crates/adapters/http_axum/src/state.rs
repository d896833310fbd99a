//! Shared application state for axum handlers.

use std::sync::Arc;

use placebook_app::ports::{PersonRepository, PlaceRepository};
use placebook_app::services::comment_service::CommentService;
use placebook_app::services::person_service::PersonService;
use placebook_app::services::place_service::PlaceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<PR, PLR> {
    /// Person CRUD service.
    pub person_service: Arc<PersonService<PR>>,
    /// Place CRUD service with owner expansion.
    pub place_service: Arc<PlaceService<PLR, PR>>,
    /// Comment service operating on places.
    pub comment_service: Arc<CommentService<PLR>>,
}

impl<PR, PLR> Clone for AppState<PR, PLR> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
            place_service: Arc::clone(&self.place_service),
            comment_service: Arc::clone(&self.comment_service),
        }
    }
}

impl<PR, PLR> AppState<PR, PLR>
where
    PR: PersonRepository + Send + Sync + 'static,
    PLR: PlaceRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        person_service: PersonService<PR>,
        place_service: PlaceService<PLR, PR>,
        comment_service: CommentService<PLR>,
    ) -> Self {
        Self {
            person_service: Arc::new(person_service),
            place_service: Arc::new(place_service),
            comment_service: Arc::new(comment_service),
        }
    }
}
