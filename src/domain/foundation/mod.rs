//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the SMAA decision model.

mod errors;
mod ids;
mod interval;

pub use errors::{EntityKind, ModelError, ValidationError};
pub use ids::{AlternativeId, CriterionId};
pub use interval::Interval;
