//! In-memory repository fakes shared by the service tests.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use placebook_domain::error::PlacebookError;
use placebook_domain::id::{PersonId, PlaceId};
use placebook_domain::person::{Person, PersonSummary};
use placebook_domain::place::Place;

use crate::ports::{PersonRepository, PlaceRepository};

#[derive(Clone, Default)]
pub struct InMemoryPersonRepo {
    store: Arc<Mutex<Vec<Person>>>,
    summary_calls: Arc<AtomicUsize>,
}

impl InMemoryPersonRepo {
    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }
}

impl PersonRepository for InMemoryPersonRepo {
    fn create(
        &self,
        person: Person,
    ) -> impl Future<Output = Result<Person, PlacebookError>> + Send {
        self.store.lock().unwrap().push(person.clone());
        async { Ok(person) }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, PlacebookError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|p| p.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, PlacebookError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn get_summaries(
        &self,
        ids: Vec<PersonId>,
    ) -> impl Future<Output = Result<Vec<PersonSummary>, PlacebookError>> + Send {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        let store = self.store.lock().unwrap();
        let result: Vec<_> = store
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(Person::summary)
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        person: Person,
    ) -> impl Future<Output = Result<Person, PlacebookError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|p| p.id == person.id) {
            *slot = person.clone();
        }
        async { Ok(person) }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<(), PlacebookError>> + Send {
        self.store.lock().unwrap().retain(|p| p.id != id);
        async { Ok(()) }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPlaceRepo {
    store: Arc<Mutex<Vec<Place>>>,
    update_calls: Arc<AtomicUsize>,
}

impl InMemoryPlaceRepo {
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl PlaceRepository for InMemoryPlaceRepo {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, PlacebookError>> + Send {
        self.store.lock().unwrap().push(place.clone());
        async { Ok(place) }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, PlacebookError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|p| p.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, PlacebookError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, PlacebookError>> + Send {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|p| p.id == place.id) {
            *slot = place.clone();
        }
        async { Ok(place) }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), PlacebookError>> + Send {
        self.store.lock().unwrap().retain(|p| p.id != id);
        async { Ok(()) }
    }
}
