//! Result set produced by the acceptability engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{AlternativeId, CriterionId};

/// SMAA-2 statistics for every alternative of a model.
///
/// Owned by whoever ran the engine; the serializer only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Per alternative, index `i` = probability of attaining rank `i + 1`.
    pub rank_acceptabilities: HashMap<AlternativeId, Vec<f64>>,
    /// Per alternative, the central weight of each criterion.
    pub central_weights: HashMap<AlternativeId, HashMap<CriterionId, f64>>,
    /// Per alternative, the confidence factor of its central weight vector.
    pub confidence_factors: HashMap<AlternativeId, f64>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rank_acceptabilities(
        mut self,
        alternative: AlternativeId,
        ranks: Vec<f64>,
    ) -> Self {
        self.rank_acceptabilities.insert(alternative, ranks);
        self
    }

    pub fn with_central_weights(
        mut self,
        alternative: AlternativeId,
        weights: HashMap<CriterionId, f64>,
    ) -> Self {
        self.central_weights.insert(alternative, weights);
        self
    }

    pub fn with_confidence_factor(mut self, alternative: AlternativeId, factor: f64) -> Self {
        self.confidence_factors.insert(alternative, factor);
        self
    }

    pub fn rank_acceptabilities_for(&self, alternative: &AlternativeId) -> Option<&[f64]> {
        self.rank_acceptabilities.get(alternative).map(Vec::as_slice)
    }

    pub fn central_weight(
        &self,
        alternative: &AlternativeId,
        criterion: &CriterionId,
    ) -> Option<f64> {
        self.central_weights
            .get(alternative)
            .and_then(|weights| weights.get(criterion))
            .copied()
    }

    pub fn confidence_factor(&self, alternative: &AlternativeId) -> Option<f64> {
        self.confidence_factors.get(alternative).copied()
    }
}
