//! JSON shapes returned by the API.
//!
//! Domain records carry no derived fields; the views add `fullName` and the
//! hemisphere flags and decide how a place's owner is rendered.

use serde::Serialize;

use placebook_domain::comment::Comment;
use placebook_domain::id::{PersonId, PlaceId};
use placebook_domain::person::{Person, PersonSummary};
use placebook_domain::place::{Owner, Place, PopulatedPlace};
use placebook_domain::time::Timestamp;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    #[serde(flatten)]
    person: Person,
    full_name: String,
}

impl From<Person> for PersonView {
    fn from(person: Person) -> Self {
        let full_name = person.full_name();
        Self { person, full_name }
    }
}

/// How the `owner` key of a place is rendered.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OwnerView {
    /// Bare identifier, as stored.
    Reference(PersonId),
    /// Expanded summary; `null` when the reference is dangling.
    Expanded(Option<PersonSummary>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceView {
    id: PlaceId,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<OwnerView>,
    comments: Vec<Comment>,
    created_at: Timestamp,
    updated_at: Timestamp,
    is_northern_hemisphere: bool,
    is_western_hemisphere: bool,
}

impl PlaceView {
    fn new(place: Place, owner: Option<OwnerView>) -> Self {
        Self {
            is_northern_hemisphere: place.is_northern_hemisphere(),
            is_western_hemisphere: place.is_western_hemisphere(),
            id: place.id,
            name: place.name,
            latitude: place.latitude,
            longitude: place.longitude,
            country: place.country,
            owner,
            comments: place.comments,
            created_at: place.created_at,
            updated_at: place.updated_at,
        }
    }
}

impl From<Place> for PlaceView {
    fn from(place: Place) -> Self {
        let owner = place.owner.map(OwnerView::Reference);
        Self::new(place, owner)
    }
}

impl From<PopulatedPlace> for PlaceView {
    fn from(populated: PopulatedPlace) -> Self {
        let owner = match populated.owner {
            Owner::Unset => None,
            Owner::Dangling(_) => Some(OwnerView::Expanded(None)),
            Owner::Resolved(summary) => Some(OwnerView::Expanded(Some(summary))),
        };
        Self::new(populated.place, owner)
    }
}

/// `{"person": {...}}`
#[derive(Debug, Serialize)]
pub struct PersonEnvelope {
    pub person: PersonView,
}

/// `{"people": [...]}`
#[derive(Debug, Serialize)]
pub struct PeopleEnvelope {
    pub people: Vec<PersonView>,
}

/// `{"place": {...}}`
#[derive(Debug, Serialize)]
pub struct PlaceEnvelope {
    pub place: PlaceView,
}

/// `{"places": [...]}`
#[derive(Debug, Serialize)]
pub struct PlacesEnvelope {
    pub places: Vec<PlaceView>,
}
