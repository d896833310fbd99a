//! Person — a named individual with a birth date and body measurements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CastError, PlacebookError, ValidationErrors};
use crate::fields::Fields;
use crate::id::PersonId;
use crate::time::{Timestamp, now};
use crate::validation::Validator;

/// A stored person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub height: f64,
    pub weight: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection of a [`Person`] used when expanding a place's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    /// Build a new person from a complete input.
    ///
    /// # Errors
    ///
    /// Returns [`PlacebookError::Validation`] listing every missing, blank,
    /// or out-of-range field.
    pub fn create(input: PersonInput) -> Result<Self, PlacebookError> {
        let mut v = Validator::new();
        v.required("firstName", input.first_name.as_ref());
        v.required("lastName", input.last_name.as_ref());
        v.required("dob", input.dob.as_ref());
        v.required("height", input.height.as_ref());
        v.required("weight", input.weight.as_ref());
        input.check(&mut v);
        let errors = v.into_errors();

        let (Some(first_name), Some(last_name), Some(dob), Some(height), Some(weight)) = (
            input.first_name,
            input.last_name,
            input.dob,
            input.height,
            input.weight,
        ) else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let created_at = now();
        Ok(Self {
            id: PersonId::new(),
            first_name,
            last_name,
            dob,
            height,
            weight,
            created_at,
            updated_at: created_at,
        })
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns every blank name or negative measurement.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("firstName", &self.first_name);
        v.not_blank("lastName", &self.last_name);
        v.min("height", self.height, 0.0);
        v.min("weight", self.weight, 0.0);
        v.finish()
    }

    /// Merge the supplied fields over this record.
    ///
    /// `updated_at` only moves when at least one field was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if the merged record is invalid; `self` is
    /// consumed either way, callers keep their own copy.
    pub fn apply(mut self, input: PersonInput) -> Result<Self, ValidationErrors> {
        if input.is_empty() {
            return Ok(self);
        }
        if let Some(first_name) = input.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            self.last_name = last_name;
        }
        if let Some(dob) = input.dob {
            self.dob = dob;
        }
        if let Some(height) = input.height {
            self.height = height;
        }
        if let Some(weight) = input.weight {
            self.weight = weight;
        }
        self.validate()?;
        self.updated_at = now();
        Ok(self)
    }

    /// First and last name separated by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn summary(&self) -> PersonSummary {
        PersonSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Fields supplied for creating or updating a [`Person`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl PersonInput {
    /// Cast a `person` payload.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] for the first field of the wrong type.
    pub fn from_fields(fields: &Fields) -> Result<Self, CastError> {
        Ok(Self {
            first_name: fields.text("firstName")?,
            last_name: fields.text("lastName")?,
            dob: fields.date("dob")?,
            height: fields.number("height")?,
            weight: fields.number("weight")?,
        })
    }

    /// Run the field rules on every supplied value.
    fn check(&self, v: &mut Validator) {
        if let Some(first_name) = &self.first_name {
            v.not_blank("firstName", first_name);
        }
        if let Some(last_name) = &self.last_name {
            v.not_blank("lastName", last_name);
        }
        if let Some(height) = self.height {
            v.min("height", height, 0.0);
        }
        if let Some(weight) = self.weight {
            v.min("weight", weight, 0.0);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.dob.is_none()
            && self.height.is_none()
            && self.weight.is_none()
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
