//! Decision model module - the validated SMAA input and its results.
//!
//! # Components
//!
//! - `Alternative`, `Criterion` - The entities a decision problem is built from
//! - `Catalog` - Ordered, uniqueness-checked entity list with id lookup
//! - `ImpactMatrix` - Sparse-then-complete table of interval measurements
//! - `DecisionModel` - The immutable input handed to the acceptability engine
//! - `ResultSet` - Rank acceptabilities, central weights and confidence factors
//! - `OutputMessage` - Run status entries for the messages document

mod catalog;
mod decision_model;
mod entities;
mod impact_matrix;
mod message;
mod results;

pub use catalog::Catalog;
pub use decision_model::DecisionModel;
pub use entities::{Alternative, Criterion, Entity, PreferenceDirection};
pub use impact_matrix::{CompleteImpactMatrix, ImpactMatrix};
pub use message::{MessageKind, OutputMessage};
pub use results::ResultSet;
