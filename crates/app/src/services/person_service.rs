//! Person service — use-cases for managing people.

use placebook_domain::error::{PlacebookError, found};
use placebook_domain::id::PersonId;
use placebook_domain::person::{Person, PersonInput};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_people(&self) -> Result<Vec<Person>, PlacebookError> {
        self.repo.get_all().await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_person(&self, id: PersonId) -> Result<Person, PlacebookError> {
        Ok(found(self.repo.get_by_id(id).await?, "Person", id)?)
    }

    /// Create a new person after validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::Validation`] if fields are missing or
    /// invalid, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_person(&self, input: PersonInput) -> Result<Person, PlacebookError> {
        let person = Person::create(input)?;
        tracing::debug!(person_id = %person.id, "creating person");
        self.repo.create(person).await
    }

    /// Merge the supplied fields into an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no person with `id` exists,
    /// [`PlacebookError::Validation`] if the merged record is invalid, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_person(
        &self,
        id: PersonId,
        input: PersonInput,
    ) -> Result<Person, PlacebookError> {
        let person = self.get_person(id).await?;
        if input.is_empty() {
            return Ok(person);
        }
        let person = person.apply(input)?;
        self.repo.update(person).await
    }

    /// Delete a person by id. Places owned by that person keep the reference.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_person(&self, id: PersonId) -> Result<(), PlacebookError> {
        self.get_person(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::services::testing::InMemoryPersonRepo;

    fn make_service() -> PersonService<InMemoryPersonRepo> {
        PersonService::new(InMemoryPersonRepo::default())
    }

    fn ada() -> PersonInput {
        PersonInput::default()
            .first_name("Ada")
            .last_name("Lovelace")
            .dob(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap())
            .height(165.0)
            .weight(55.0)
    }

    #[tokio::test]
    async fn should_create_person_and_fetch_it_back() {
        let svc = make_service();
        let created = svc.create_person(ada()).await.unwrap();

        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn should_reject_create_when_fields_missing() {
        let svc = make_service();
        let result = svc
            .create_person(PersonInput::default().first_name("Ada"))
            .await;
        assert!(matches!(result, Err(PlacebookError::Validation(_))));
        assert!(svc.list_people().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_person_missing() {
        let svc = make_service();
        let result = svc.get_person(PersonId::new()).await;
        assert!(matches!(result, Err(PlacebookError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_people() {
        let svc = make_service();
        svc.create_person(ada()).await.unwrap();
        svc.create_person(ada().first_name("Grace").last_name("Hopper"))
            .await
            .unwrap();

        let all = svc.list_people().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let svc = make_service();
        let created = svc.create_person(ada()).await.unwrap();

        svc.update_person(created.id, PersonInput::default().weight(60.0))
            .await
            .unwrap();

        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched.weight, 60.0);
        assert_eq!(fetched.first_name, "Ada");
        assert_eq!(fetched.height, created.height);
    }

    #[tokio::test]
    async fn should_leave_person_unchanged_when_update_is_empty() {
        let svc = make_service();
        let created = svc.create_person(ada()).await.unwrap();

        svc.update_person(created.id, PersonInput::default())
            .await
            .unwrap();

        assert_eq!(svc.get_person(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_not_store_invalid_update() {
        let svc = make_service();
        let created = svc.create_person(ada()).await.unwrap();

        let result = svc
            .update_person(created.id, PersonInput::default().height(-1.0))
            .await;
        assert!(matches!(result, Err(PlacebookError::Validation(_))));
        assert_eq!(svc.get_person(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_person() {
        let svc = make_service();
        let result = svc
            .update_person(PersonId::new(), PersonInput::default().weight(1.0))
            .await;
        assert!(matches!(result, Err(PlacebookError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_person() {
        let svc = make_service();
        let created = svc.create_person(ada()).await.unwrap();

        svc.delete_person(created.id).await.unwrap();

        let result = svc.get_person(created.id).await;
        assert!(matches!(result, Err(PlacebookError::NotFound(_))));
        let again = svc.delete_person(created.id).await;
        assert!(matches!(again, Err(PlacebookError::NotFound(_))));
    }
}
