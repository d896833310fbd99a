//! Storage port — repository traits for persistence.

use std::future::Future;

use placebook_domain::error::PlacebookError;
use placebook_domain::id::{PersonId, PlaceId};
use placebook_domain::person::{Person, PersonSummary};
use placebook_domain::place::Place;

/// Repository for persisting and querying [`Person`]s.
pub trait PersonRepository {
    /// Insert a new person.
    fn create(&self, person: Person)
    -> impl Future<Output = Result<Person, PlacebookError>> + Send;

    /// Get a person by its unique identifier.
    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PlacebookError>> + Send;

    /// Get every person, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PlacebookError>> + Send;

    /// Project the names of the given people. Unknown ids are skipped.
    fn get_summaries(
        &self,
        ids: Vec<PersonId>,
    ) -> impl Future<Output = Result<Vec<PersonSummary>, PlacebookError>> + Send;

    /// Overwrite a stored person.
    fn update(&self, person: Person)
    -> impl Future<Output = Result<Person, PlacebookError>> + Send;

    /// Delete a person by its unique identifier.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PlacebookError>> + Send;
}

/// Repository for persisting and querying [`Place`]s.
///
/// A place is always read and written whole, its comments included: there is
/// no separate path for comments.
pub trait PlaceRepository {
    /// Insert a new place.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, PlacebookError>> + Send;

    /// Get a place by its unique identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, PlacebookError>> + Send;

    /// Get every place, oldest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, PlacebookError>> + Send;

    /// Overwrite a stored place, replacing its whole comment list.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, PlacebookError>> + Send;

    /// Delete a place, and with it its comments.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), PlacebookError>> + Send;
}
