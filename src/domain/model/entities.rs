//! Alternatives and criteria.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, CriterionId, EntityKind};

/// Common view over the entities held in a [`Catalog`](super::Catalog).
pub trait Entity {
    /// Which kind of entity this is, for error reporting.
    const KIND: EntityKind;

    /// The entity's unique id.
    fn id_str(&self) -> &str;
}

/// One of the options being compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
}

impl Alternative {
    pub fn new(id: AlternativeId) -> Self {
        Self { id }
    }
}

impl Entity for Alternative {
    const KIND: EntityKind = EntityKind::Alternative;

    fn id_str(&self) -> &str {
        self.id.as_str()
    }
}

/// Preference direction of a cardinal criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceDirection {
    /// Larger values are preferred.
    #[default]
    Ascending,
    /// Smaller values are preferred.
    Descending,
}

/// A cardinal-scaled dimension of evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub direction: PreferenceDirection,
}

impl Criterion {
    /// Creates a cardinal criterion where larger values are preferred.
    pub fn ascending(id: CriterionId) -> Self {
        Self {
            id,
            direction: PreferenceDirection::Ascending,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == PreferenceDirection::Ascending
    }
}

impl Entity for Criterion {
    const KIND: EntityKind = EntityKind::Criterion;

    fn id_str(&self) -> &str {
        self.id.as_str()
    }
}
