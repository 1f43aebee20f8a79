//! Decision model - the sole input to the acceptability engine.

use super::{Alternative, Catalog, CompleteImpactMatrix, Criterion};
use crate::domain::foundation::{AlternativeId, CriterionId, Interval};

/// Alternatives, criteria and a measurement for every pair.
///
/// Built once per run from a validated matrix; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionModel {
    alternatives: Catalog<Alternative>,
    criteria: Catalog<Criterion>,
    /// `measurements[criterion][alternative]`
    measurements: Vec<Vec<Interval>>,
}

impl DecisionModel {
    /// Assembles a model by copying every (criterion, alternative) measurement.
    ///
    /// # Panics
    ///
    /// If the matrix was not validated against these catalogs.
    pub fn new(
        alternatives: Catalog<Alternative>,
        criteria: Catalog<Criterion>,
        matrix: &CompleteImpactMatrix,
    ) -> Self {
        assert_eq!(matrix.alternative_count(), alternatives.len());
        assert_eq!(matrix.criterion_count(), criteria.len());

        let measurements = (0..criteria.len())
            .map(|c| {
                (0..alternatives.len())
                    .map(|a| matrix.measurement(c, a))
                    .collect()
            })
            .collect();

        Self {
            alternatives,
            criteria,
            measurements,
        }
    }

    pub fn alternatives(&self) -> &Catalog<Alternative> {
        &self.alternatives
    }

    pub fn criteria(&self) -> &Catalog<Criterion> {
        &self.criteria
    }

    /// Looks up the measurement of an alternative on a criterion.
    pub fn measurement(
        &self,
        criterion: &CriterionId,
        alternative: &AlternativeId,
    ) -> Option<Interval> {
        let c = self.criteria.position(criterion.as_str())?;
        let a = self.alternatives.position(alternative.as_str())?;
        Some(self.measurements[c][a])
    }

    /// Iterates `(criterion, alternative, interval)` in criterion-major order.
    pub fn measurements(&self) -> impl Iterator<Item = (&Criterion, &Alternative, Interval)> + '_ {
        self.criteria.iter().enumerate().flat_map(move |(c, criterion)| {
            self.alternatives
                .iter()
                .enumerate()
                .map(move |(a, alternative)| (criterion, alternative, self.measurements[c][a]))
        })
    }
}
