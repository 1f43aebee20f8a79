//! Domain layer containing the decision model and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, intervals, errors)
//! - `model` - Entities, impact matrix, decision model and engine results

pub mod foundation;
pub mod model;
