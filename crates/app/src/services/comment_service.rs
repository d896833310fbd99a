//! Comment service — use-cases for comments embedded in a place.
//!
//! Every mutation loads the owning place, changes its in-memory comment list,
//! then saves the whole place. Nothing is written if a step before the save
//! fails. Two concurrent mutations on the same place race: the last save wins
//! and silently discards the other change.

use placebook_domain::comment::{Comment, CommentInput};
use placebook_domain::error::{PlacebookError, found};
use placebook_domain::id::{CommentId, PlaceId};
use placebook_domain::place::Place;

use crate::ports::PlaceRepository;

/// Application service for comment operations.
pub struct CommentService<P> {
    places: P,
}

impl<P: PlaceRepository> CommentService<P> {
    /// Create a new service backed by the given place repository.
    pub fn new(places: P) -> Self {
        Self { places }
    }

    /// Look up one comment of a place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when the place or the comment does
    /// not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_comment(
        &self,
        place_id: PlaceId,
        comment_id: CommentId,
    ) -> Result<Comment, PlacebookError> {
        let place = self.find_place(place_id).await?;
        Ok(found(place.comment(comment_id).cloned(), "Comment", comment_id)?)
    }

    /// Append a comment to a place and return the saved place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when the place does not exist, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn add_comment(
        &self,
        place_id: PlaceId,
        input: CommentInput,
    ) -> Result<Place, PlacebookError> {
        let mut place = self.find_place(place_id).await?;
        let comment_id = place.push_comment(input).id;
        tracing::debug!(%comment_id, "appending comment");
        self.places.update(place).await
    }

    /// Overwrite the supplied fields of a comment and save its place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when the place or the comment does
    /// not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_comment(
        &self,
        place_id: PlaceId,
        comment_id: CommentId,
        input: CommentInput,
    ) -> Result<Comment, PlacebookError> {
        let mut place = self.find_place(place_id).await?;
        let changed = !input.is_empty();
        let comment = found(
            place.update_comment(comment_id, input).cloned(),
            "Comment",
            comment_id,
        )?;
        if changed {
            self.places.update(place).await?;
        }
        Ok(comment)
    }

    /// Remove a comment from its place and save the place.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when the place or the comment does
    /// not exist, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        place_id: PlaceId,
        comment_id: CommentId,
    ) -> Result<(), PlacebookError> {
        let mut place = self.find_place(place_id).await?;
        found(place.remove_comment(comment_id), "Comment", comment_id)?;
        self.places.update(place).await?;
        Ok(())
    }

    async fn find_place(&self, id: PlaceId) -> Result<Place, PlacebookError> {
        Ok(found(self.places.get_by_id(id).await?, "Place", id)?)
    }
}

#[cfg(test)]
mod tests {
    use placebook_domain::place::PlaceInput;

    use super::*;
    use crate::services::testing::InMemoryPlaceRepo;

    async fn setup() -> (CommentService<InMemoryPlaceRepo>, InMemoryPlaceRepo, Place) {
        let repo = InMemoryPlaceRepo::default();
        let place = Place::create(
            PlaceInput::default()
                .name("Lisbon")
                .coordinates(38.7223, -9.1393)
                .country("Portugal"),
        )
        .unwrap();
        let place = repo.create(place).await.unwrap();
        (CommentService::new(repo.clone()), repo, place)
    }

    fn comment(title: &str, body: &str) -> CommentInput {
        CommentInput::default().title(title).body(body)
    }

    #[tokio::test]
    async fn should_append_comment_and_return_whole_place() {
        let (svc, _, place) = setup().await;

        let saved = svc
            .add_comment(place.id, comment("Trams", "Take the 28"))
            .await
            .unwrap();

        assert_eq!(saved.id, place.id);
        assert_eq!(saved.name, place.name);
        assert_eq!(saved.comments.len(), 1);
        let added = &saved.comments[0];
        let fetched = svc.get_comment(place.id, added.id).await.unwrap();
        assert_eq!(fetched.title.as_deref(), Some("Trams"));
        assert_eq!(fetched.body.as_deref(), Some("Take the 28"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_place_missing() {
        let (svc, _, _) = setup().await;
        let missing = PlaceId::new();

        assert!(matches!(
            svc.add_comment(missing, comment("a", "b")).await,
            Err(PlacebookError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_comment(missing, CommentId::new()).await,
            Err(PlacebookError::NotFound(_))
        ));
        assert!(matches!(
            svc.update_comment(missing, CommentId::new(), comment("a", "b"))
                .await,
            Err(PlacebookError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_comment(missing, CommentId::new()).await,
            Err(PlacebookError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_comment_missing() {
        let (svc, repo, place) = setup().await;
        svc.add_comment(place.id, comment("a", "b")).await.unwrap();
        let before = repo.get_by_id(place.id).await.unwrap();

        let unknown = CommentId::new();
        let get = svc.get_comment(place.id, unknown).await;
        let update = svc
            .update_comment(place.id, unknown, comment("x", "y"))
            .await;
        let delete = svc.delete_comment(place.id, unknown).await;

        for result in [get.map(|_| ()), update.map(|_| ()), delete] {
            match result {
                Err(PlacebookError::NotFound(err)) => assert_eq!(err.entity, "Comment"),
                other => panic!("expected comment not found, got {other:?}"),
            }
        }
        assert_eq!(repo.get_by_id(place.id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn should_overwrite_comment_fields() {
        let (svc, _, place) = setup().await;
        let saved = svc
            .add_comment(place.id, comment("Trams", "Take the 28"))
            .await
            .unwrap();
        let id = saved.comments[0].id;

        svc.update_comment(place.id, id, CommentInput::default().body("Walk instead"))
            .await
            .unwrap();

        let fetched = svc.get_comment(place.id, id).await.unwrap();
        assert_eq!(fetched.title.as_deref(), Some("Trams"));
        assert_eq!(fetched.body.as_deref(), Some("Walk instead"));
    }

    #[tokio::test]
    async fn should_delete_comment_and_keep_siblings() {
        let (svc, repo, place) = setup().await;
        svc.add_comment(place.id, comment("one", "1")).await.unwrap();
        svc.add_comment(place.id, comment("two", "2")).await.unwrap();
        let saved = svc.add_comment(place.id, comment("three", "3")).await.unwrap();
        let ids: Vec<_> = saved.comments.iter().map(|c| c.id).collect();

        svc.delete_comment(place.id, ids[1]).await.unwrap();

        let after = repo.get_by_id(place.id).await.unwrap().unwrap();
        let remaining: Vec<_> = after.comments.iter().map(|c| c.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
        assert_eq!(after.comments[0], saved.comments[0]);
        assert_eq!(after.comments[1], saved.comments[2]);
        assert_eq!(after.name, place.name);
        assert_eq!(after.latitude, place.latitude);
        assert_eq!(after.country, place.country);
    }

    #[tokio::test]
    async fn should_keep_both_changes_when_comment_updates_are_sequential() {
        let (svc, _, place) = setup().await;
        svc.add_comment(place.id, comment("a", "a")).await.unwrap();
        let saved = svc.add_comment(place.id, comment("b", "b")).await.unwrap();
        let (a, b) = (saved.comments[0].id, saved.comments[1].id);

        svc.update_comment(place.id, a, CommentInput::default().body("A"))
            .await
            .unwrap();
        svc.update_comment(place.id, b, CommentInput::default().body("B"))
            .await
            .unwrap();

        assert_eq!(
            svc.get_comment(place.id, a).await.unwrap().body.as_deref(),
            Some("A")
        );
        assert_eq!(
            svc.get_comment(place.id, b).await.unwrap().body.as_deref(),
            Some("B")
        );
    }

    #[tokio::test]
    async fn should_skip_save_when_update_supplies_nothing() {
        let (svc, repo, place) = setup().await;
        let saved = svc.add_comment(place.id, comment("a", "a")).await.unwrap();
        let writes = repo.update_calls();

        let unchanged = svc
            .update_comment(place.id, saved.comments[0].id, CommentInput::default())
            .await
            .unwrap();

        assert_eq!(unchanged, saved.comments[0]);
        assert_eq!(repo.update_calls(), writes);
    }
}
