//! Field-level validation shared by every record type.

use crate::error::{ValidationError, ValidationErrors};
use crate::fields::is_blank;

/// Collects field errors so a record reports all of them at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationError>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a [`ValidationError::Required`] for a value that was not supplied.
    pub fn required<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.errors.push(ValidationError::Required { field });
        }
    }

    pub fn not_blank(&mut self, field: &'static str, value: &str) {
        if is_blank(value) {
            self.errors.push(ValidationError::Blank { field });
        }
    }

    pub fn min(&mut self, field: &'static str, value: f64, min: f64) {
        if value < min {
            self.errors.push(ValidationError::BelowMinimum { field, min });
        }
    }

    pub fn max(&mut self, field: &'static str, value: f64, max: f64) {
        if value > max {
            self.errors.push(ValidationError::AboveMaximum { field, max });
        }
    }

    pub fn range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        self.min(field, value, min);
        self.max(field, value, max);
    }

    /// Take whatever was collected, even if nothing was.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors::new(self.errors)
    }

    /// # Errors
    ///
    /// Returns every collected error, if any.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }
}
