//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value,
        }
    }
}

/// The two kinds of entity a decision problem is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Alternative,
    Criterion,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Alternative => "alternative",
            EntityKind::Criterion => "criterion",
        };
        write!(f, "{}", s)
    }
}

/// Referential-integrity failures while assembling a decision model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Unknown {kind} '{id}' in performance table")]
    UnknownEntity { kind: EntityKind, id: String },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateEntity { kind: EntityKind, id: String },

    #[error("Missing measurement for alternative '{alternative}' on criterion '{criterion}'")]
    MissingMeasurement {
        alternative: String,
        criterion: String,
    },
}

impl ModelError {
    /// Creates an unknown entity error.
    pub fn unknown(kind: EntityKind, id: impl Into<String>) -> Self {
        ModelError::UnknownEntity {
            kind,
            id: id.into(),
        }
    }

    /// Creates a duplicate entity error.
    pub fn duplicate(kind: EntityKind, id: impl Into<String>) -> Self {
        ModelError::DuplicateEntity {
            kind,
            id: id.into(),
        }
    }

    /// Creates a missing measurement error for an (alternative, criterion) pair.
    pub fn missing_measurement(
        alternative: impl Into<String>,
        criterion: impl Into<String>,
    ) -> Self {
        ModelError::MissingMeasurement {
            alternative: alternative.into(),
            criterion: criterion.into(),
        }
    }
}
