//! Untyped request fields and their conversion into typed values.
//!
//! Payloads arrive as JSON objects. [`Fields`] wraps one such object and
//! exposes typed getters that treat `null` the same as an absent key, and
//! report a [`CastError`] when a value has the wrong shape.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{CastError, PlacebookError, ValidationError};
use crate::time::parse_date;

/// A JSON object received as a resource payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
    #[must_use]
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Pull the object stored under `key` out of a request body such as
    /// `{"person": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when `key` is absent or `null`,
    /// and [`CastError`] when the body or the value is not an object.
    pub fn from_envelope(body: Value, key: &'static str) -> Result<Self, PlacebookError> {
        let mut outer = match body {
            Value::Object(outer) => outer,
            other => return Err(CastError::new("body", "object", other).into()),
        };
        match outer.remove(key) {
            None | Some(Value::Null) => Err(ValidationError::Required { field: key }.into()),
            Some(Value::Object(inner)) => Ok(Self(inner)),
            Some(other) => Err(CastError::new(key, "object", other).into()),
        }
    }

    fn get(&self, field: &str) -> Option<&Value> {
        match self.0.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// # Errors
    ///
    /// Returns [`CastError`] when the value is present but not a string.
    pub fn text(&self, field: &str) -> Result<Option<String>, CastError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(CastError::new(field, "string", other)),
        }
    }

    /// Numbers may also be given as numeric strings.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] when the value is not a finite number.
    pub fn number(&self, field: &str) -> Result<Option<f64>, CastError> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(CastError::new(field, "number", value)),
        }
    }

    /// # Errors
    ///
    /// Returns [`CastError`] when the value is not a recognizable date.
    pub fn date(&self, field: &str) -> Result<Option<NaiveDate>, CastError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => parse_date(s)
                .map(Some)
                .ok_or_else(|| CastError::new(field, "date", s)),
            Some(other) => Err(CastError::new(field, "date", other)),
        }
    }

    /// Read an identifier, parsed by `parse` (usually `XxxId::parse_field`).
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] when the value is not a string or `parse` fails.
    pub fn id<T>(
        &self,
        field: &str,
        parse: impl FnOnce(&str, &str) -> Result<T, CastError>,
    ) -> Result<Option<T>, CastError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => parse(field, s).map(Some),
            Some(other) => Err(CastError::new(field, "identifier", other)),
        }
    }
}

/// Whether `value` is a string with nothing but whitespace in it.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Remove blank-string fields from every top-level object of a request body,
/// e.g. `{"person": {"firstName": "", "lastName": "Doe"}}` becomes
/// `{"person": {"lastName": "Doe"}}`.
pub fn strip_blank_fields(body: &mut Value) {
    let Value::Object(outer) = body else {
        return;
    };
    for inner in outer.values_mut() {
        if let Value::Object(fields) = inner {
            fields.retain(|_, value| !matches!(value, Value::String(s) if is_blank(s)));
        }
    }
}
