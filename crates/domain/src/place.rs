//! Place — a named location with an optional owner and embedded comments.

use serde::{Deserialize, Serialize};

use crate::comment::{Comment, CommentInput};
use crate::error::{CastError, PlacebookError, ValidationErrors};
use crate::fields::Fields;
use crate::id::{CommentId, PersonId, PlaceId};
use crate::person::PersonSummary;
use crate::time::{Timestamp, now};
use crate::validation::Validator;

const LATITUDE_BOUND: f64 = 90.0;
const LONGITUDE_BOUND: f64 = 180.0;

/// A stored place record, comments included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub owner: Option<PersonId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    /// Build a new place without comments.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::Validation`] listing every missing, blank,
    /// or out-of-range field.
    pub fn create(input: PlaceInput) -> Result<Self, PlacebookError> {
        let mut v = Validator::new();
        v.required("name", input.name.as_ref());
        v.required("latitude", input.latitude.as_ref());
        v.required("longitude", input.longitude.as_ref());
        input.check(&mut v);
        let errors = v.into_errors();

        let (Some(name), Some(latitude), Some(longitude)) =
            (input.name, input.latitude, input.longitude)
        else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let created_at = now();
        Ok(Self {
            id: PlaceId::new(),
            name,
            latitude,
            longitude,
            country: input.country,
            owner: input.owner,
            comments: Vec::new(),
            created_at,
            updated_at: created_at,
        })
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns a blank name and any coordinate outside its range.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("name", &self.name);
        v.range("latitude", self.latitude, -LATITUDE_BOUND, LATITUDE_BOUND);
        v.range("longitude", self.longitude, -LONGITUDE_BOUND, LONGITUDE_BOUND);
        v.finish()
    }

    /// Merge the supplied fields over this record. Comments are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if the merged record is invalid.
    pub fn apply(mut self, input: PlaceInput) -> Result<Self, ValidationErrors> {
        if input.is_empty() {
            return Ok(self);
        }
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(latitude) = input.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = input.longitude {
            self.longitude = longitude;
        }
        if let Some(country) = input.country {
            self.country = Some(country);
        }
        if let Some(owner) = input.owner {
            self.owner = Some(owner);
        }
        self.validate()?;
        self.touch();
        Ok(self)
    }

    #[must_use]
    pub fn is_northern_hemisphere(&self) -> bool {
        self.latitude > 0.0
    }

    #[must_use]
    pub fn is_western_hemisphere(&self) -> bool {
        self.longitude < 0.0
    }

    #[must_use]
    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Append a new comment at the end of the list.
    pub fn push_comment(&mut self, input: CommentInput) -> &Comment {
        self.touch();
        let index = self.comments.len();
        self.comments.push(Comment::new(input));
        &self.comments[index]
    }

    /// Overwrite a comment in place. `None` when no comment has `id`.
    pub fn update_comment(&mut self, id: CommentId, input: CommentInput) -> Option<&Comment> {
        let index = self.comments.iter().position(|c| c.id == id)?;
        if !input.is_empty() {
            self.comments[index].overwrite(input);
            self.touch();
        }
        Some(&self.comments[index])
    }

    /// Remove a comment, keeping the order of its siblings.
    pub fn remove_comment(&mut self, id: CommentId) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == id)?;
        let removed = self.comments.remove(index);
        self.touch();
        Some(removed)
    }

    fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Fields supplied for creating or updating a [`Place`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceInput {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub owner: Option<PersonId>,
}

impl PlaceInput {
    /// Cast a `place` payload.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] for the first field of the wrong type.
    pub fn from_fields(fields: &Fields) -> Result<Self, CastError> {
        Ok(Self {
            name: fields.text("name")?,
            latitude: fields.number("latitude")?,
            longitude: fields.number("longitude")?,
            country: fields.text("country")?,
            owner: fields.id("owner", PersonId::parse_field)?,
        })
    }

    /// Run the field rules on every supplied value.
    fn check(&self, v: &mut Validator) {
        if let Some(name) = &self.name {
            v.not_blank("name", name);
        }
        if let Some(latitude) = self.latitude {
            v.range("latitude", latitude, -LATITUDE_BOUND, LATITUDE_BOUND);
        }
        if let Some(longitude) = self.longitude {
            v.range("longitude", longitude, -LONGITUDE_BOUND, LONGITUDE_BOUND);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.country.is_none()
            && self.owner.is_none()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, owner: PersonId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// What a place's owner reference resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Owner {
    /// The place has no owner.
    Unset,
    /// The referenced person no longer exists.
    Dangling(PersonId),
    Resolved(PersonSummary),
}

/// A place with its owner reference expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPlace {
    pub place: Place,
    pub owner: Owner,
}

impl PopulatedPlace {
    /// Expand `place.owner` using `lookup`.
    pub fn resolve(place: Place, lookup: impl FnOnce(PersonId) -> Option<PersonSummary>) -> Self {
        let owner = match place.owner {
            None => Owner::Unset,
            Some(id) => lookup(id).map_or(Owner::Dangling(id), Owner::Resolved),
        };
        Self { place, owner }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::error::ValidationError;

    fn paris() -> PlaceInput {
        PlaceInput::default()
            .name("Paris")
            .coordinates(48.8566, 2.3522)
            .country("France")
    }

    #[test]
    fn should_create_place_without_comments() {
        let place = Place::create(paris()).unwrap();
        assert_eq!(place.name, "Paris");
        assert!(place.comments.is_empty());
        assert!(place.owner.is_none());
    }

    #[test]
    fn should_require_name_and_coordinates() {
        let err = Place::create(PlaceInput::default().country("Nowhere")).unwrap_err();
        let PlacebookError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::Required { field: "name" },
                ValidationError::Required { field: "latitude" },
                ValidationError::Required { field: "longitude" },
            ]
        );
    }

    #[test]
    fn should_reject_coordinates_out_of_range() {
        let err = Place::create(paris().coordinates(91.0, -180.5)).unwrap_err();
        let PlacebookError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.contains_field("latitude"));
        assert!(errors.contains_field("longitude"));
    }

    #[test]
    fn should_report_out_of_range_coordinate_next_to_missing_fields() {
        let err = Place::create(PlaceInput {
            latitude: Some(200.0),
            ..PlaceInput::default()
        })
        .unwrap_err();
        let PlacebookError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::Required { field: "name" },
                ValidationError::Required { field: "longitude" },
                ValidationError::AboveMaximum {
                    field: "latitude",
                    max: 90.0
                },
            ]
        );
    }

    #[test]
    fn should_derive_hemispheres_from_coordinates() {
        let cases = [
            (48.8, 2.3, true, false),
            (-33.9, 151.2, false, false),
            (40.7, -74.0, true, true),
            (-34.6, -58.4, false, true),
            (0.0, 0.0, false, false),
        ];
        for (lat, lon, north, west) in cases {
            let place = Place::create(paris().coordinates(lat, lon)).unwrap();
            assert_eq!(place.is_northern_hemisphere(), north, "lat {lat}");
            assert_eq!(place.is_western_hemisphere(), west, "lon {lon}");
        }
    }

    #[test]
    fn should_merge_supplied_fields_and_keep_comments() {
        let mut place = Place::create(paris()).unwrap();
        place.push_comment(CommentInput::default().title("Hi"));
        let owner = PersonId::new();

        let updated = place
            .clone()
            .apply(PlaceInput::default().name("Paris, FR").owner(owner))
            .unwrap();
        assert_eq!(updated.name, "Paris, FR");
        assert_eq!(updated.owner, Some(owner));
        assert_eq!(updated.latitude, place.latitude);
        assert_eq!(updated.comments, place.comments);
    }

    #[test]
    fn should_keep_country_and_owner_when_update_sends_null() {
        let owner = PersonId::new();
        let place = Place::create(paris().owner(owner)).unwrap();
        let Value::Object(map) = json!({ "country": null, "owner": null, "name": "Lutetia" }) else {
            unreachable!()
        };

        let input = PlaceInput::from_fields(&Fields::new(map)).unwrap();
        let updated = place.apply(input).unwrap();

        assert_eq!(updated.name, "Lutetia");
        assert_eq!(updated.country.as_deref(), Some("France"));
        assert_eq!(updated.owner, Some(owner));
    }

    #[test]
    fn should_keep_insertion_order_of_comments() {
        let mut place = Place::create(paris()).unwrap();
        let a = place.push_comment(CommentInput::default().title("a")).id;
        let b = place.push_comment(CommentInput::default().title("b")).id;
        let c = place.push_comment(CommentInput::default().title("c")).id;

        let ids: Vec<_> = place.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn should_find_update_and_remove_comment_by_id() {
        let mut place = Place::create(paris()).unwrap();
        let a = place.push_comment(CommentInput::default().title("a")).id;
        let b = place.push_comment(CommentInput::default().title("b")).id;

        let updated = place
            .update_comment(a, CommentInput::default().body("changed"))
            .unwrap();
        assert_eq!(updated.body.as_deref(), Some("changed"));

        let removed = place.remove_comment(a).unwrap();
        assert_eq!(removed.id, a);
        assert!(place.comment(a).is_none());
        assert_eq!(place.comment(b).unwrap().title.as_deref(), Some("b"));
    }

    #[test]
    fn should_return_none_for_unknown_comment() {
        let mut place = Place::create(paris()).unwrap();
        let unknown = CommentId::new();
        assert!(place.comment(unknown).is_none());
        assert!(
            place
                .update_comment(unknown, CommentInput::default().title("x"))
                .is_none()
        );
        assert!(place.remove_comment(unknown).is_none());
    }

    #[test]
    fn should_resolve_owner_states() {
        let place = Place::create(paris()).unwrap();
        let unset = PopulatedPlace::resolve(place.clone(), |_| unreachable!());
        assert_eq!(unset.owner, Owner::Unset);

        let owner = PersonId::new();
        let owned = place.apply(PlaceInput::default().owner(owner)).unwrap();
        let dangling = PopulatedPlace::resolve(owned.clone(), |_| None);
        assert_eq!(dangling.owner, Owner::Dangling(owner));

        let summary = PersonSummary {
            id: owner,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };
        let resolved = PopulatedPlace::resolve(owned, |_| Some(summary.clone()));
        assert_eq!(resolved.owner, Owner::Resolved(summary));
    }
}
