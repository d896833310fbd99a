//! Typed identifier newtypes backed by UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CastError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $entity:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }

            /// Parse a path or payload value, naming `field` in the error.
            ///
            /// # Errors
            ///
            /// Returns [`CastError`] when `value` is not a UUID.
            pub fn parse_field(field: &str, value: &str) -> Result<Self, CastError> {
                Self::from_str(value).map_err(|_| CastError::new(field, $entity, value))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Person`](crate::person::Person).
    PersonId,
    "PersonId"
);

define_id!(
    /// Unique identifier for a [`Place`](crate::place::Place).
    PlaceId,
    "PlaceId"
);

define_id!(
    /// Unique identifier for a [`Comment`](crate::comment::Comment) within its place.
    CommentId,
    "CommentId"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = PersonId::new();
        let b = PersonId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PlaceId::new();
        let parsed: PlaceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = CommentId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_name_field_when_parse_field_fails() {
        let err = PlaceId::parse_field("placeId", "5a7db6c74d55bc51bdf39793").unwrap_err();
        assert_eq!(err.field, "placeId");
        assert_eq!(err.expected, "PlaceId");
        assert_eq!(err.value, "5a7db6c74d55bc51bdf39793");
    }

    #[test]
    fn should_wrap_existing_uuid_when_using_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let id = PersonId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }
}
