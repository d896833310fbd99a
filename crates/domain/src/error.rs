//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlacebookError`] via `From`.

use std::fmt;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum PlacebookError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl From<ValidationError> for PlacebookError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(ValidationErrors::from(err))
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{field}` is required")]
    Required { field: &'static str },

    #[error("`{field}` must not be blank")]
    Blank { field: &'static str },

    #[error("`{field}` must be at least {min}")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("`{field}` must be at most {max}")]
    AboveMaximum { field: &'static str, max: f64 },
}

impl ValidationError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::Blank { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. } => field,
        }
    }
}

/// Every field error found while validating one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field() == field)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Translate an optional lookup result into a [`NotFoundError`].
///
/// # Errors
///
/// Returns [`NotFoundError`] when `value` is `None`.
pub fn found<T>(
    value: Option<T>,
    entity: &'static str,
    id: impl fmt::Display,
) -> Result<T, NotFoundError> {
    value.ok_or_else(|| NotFoundError {
        entity,
        id: id.to_string(),
    })
}

/// A value could not be interpreted as the expected type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot cast `{field}` to {expected}: {value}")]
pub struct CastError {
    pub field: String,
    pub expected: &'static str,
    pub value: String,
}

impl CastError {
    #[must_use]
    pub fn new(field: impl Into<String>, expected: &'static str, value: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            expected,
            value: value.to_string(),
        }
    }
}
