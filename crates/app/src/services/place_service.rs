//! Place service — use-cases for managing places.
//!
//! Reads expand the owner reference with an explicit second lookup against
//! the person repository.

use std::collections::HashMap;

use placebook_domain::error::{PlacebookError, found};
use placebook_domain::id::PlaceId;
use placebook_domain::place::{Place, PlaceInput, PopulatedPlace};

use crate::ports::{PersonRepository, PlaceRepository};

/// Application service for place CRUD operations.
pub struct PlaceService<P, R> {
    places: P,
    people: R,
}

impl<P, R> PlaceService<P, R>
where
    P: PlaceRepository,
    R: PersonRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: P, people: R) -> Self {
        Self { places, people }
    }

    /// List all places with their owners expanded.
    ///
    /// Owners are fetched in one batch for the whole list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from either repository.
    pub async fn list_places(&self) -> Result<Vec<PopulatedPlace>, PlacebookError> {
        let places = self.places.get_all().await?;

        let mut owner_ids: Vec<_> = places.iter().filter_map(|p| p.owner).collect();
        owner_ids.sort_unstable_by_key(|id| id.as_uuid());
        owner_ids.dedup();

        let owners: HashMap<_, _> = if owner_ids.is_empty() {
            HashMap::new()
        } else {
            self.people
                .get_summaries(owner_ids)
                .await?
                .into_iter()
                .map(|summary| (summary.id, summary))
                .collect()
        };

        Ok(places
            .into_iter()
            .map(|place| PopulatedPlace::resolve(place, |id| owners.get(&id).cloned()))
            .collect())
    }

    /// Look up a place by id with its owner expanded.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no place with `id` exists,
    /// or a storage error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: PlaceId) -> Result<PopulatedPlace, PlacebookError> {
        let place = self.find(id).await?;
        let owner = match place.owner {
            Some(owner_id) => self
                .people
                .get_summaries(vec![owner_id])
                .await?
                .into_iter()
                .next(),
            None => None,
        };
        Ok(PopulatedPlace::resolve(place, |_| owner))
    }

    /// Create a new place after validating every field.
    ///
    /// The owner reference is stored as given; it is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::Validation`] if fields are missing or
    /// invalid, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_place(&self, input: PlaceInput) -> Result<Place, PlacebookError> {
        let place = Place::create(input)?;
        tracing::debug!(place_id = %place.id, "creating place");
        self.places.create(place).await
    }

    /// Merge the supplied fields into an existing place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no place with `id` exists,
    /// [`PlacebookError::Validation`] if the merged record is invalid, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_place(
        &self,
        id: PlaceId,
        input: PlaceInput,
    ) -> Result<Place, PlacebookError> {
        let place = self.find(id).await?;
        if input.is_empty() {
            return Ok(place);
        }
        let place = place.apply(input)?;
        self.places.update(place).await
    }

    /// Delete a place and its comments.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), PlacebookError> {
        self.find(id).await?;
        self.places.delete(id).await
    }

    async fn find(&self, id: PlaceId) -> Result<Place, PlacebookError> {
        Ok(found(self.places.get_by_id(id).await?, "Place", id)?)
    }
}
