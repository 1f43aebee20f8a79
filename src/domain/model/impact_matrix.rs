//! Impact matrix - measurements of every alternative on every criterion.
//!
//! The performance table arrives as a sparse list of per-alternative blocks, so
//! the matrix is filled entry by entry and only checked for completeness once
//! every block has been read. Validation consumes the [`ImpactMatrix`] and
//! yields a [`CompleteImpactMatrix`]; only the latter can build a model.

use super::{Alternative, Catalog, Criterion};
use crate::domain::foundation::{Interval, ModelError};

/// A partially filled alternative x criterion table of intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactMatrix {
    alternative_count: usize,
    criterion_count: usize,
    /// Row-major by criterion: `cells[criterion * alternative_count + alternative]`.
    cells: Vec<Option<Interval>>,
}

impl ImpactMatrix {
    /// Creates an empty matrix sized for the given entity counts.
    pub fn new(alternative_count: usize, criterion_count: usize) -> Self {
        Self {
            alternative_count,
            criterion_count,
            cells: vec![None; alternative_count * criterion_count],
        }
    }

    /// Creates an empty matrix sized for the given catalogs.
    pub fn for_catalogs(
        alternatives: &Catalog<Alternative>,
        criteria: &Catalog<Criterion>,
    ) -> Self {
        Self::new(alternatives.len(), criteria.len())
    }

    fn offset(&self, criterion: usize, alternative: usize) -> usize {
        assert!(
            criterion < self.criterion_count && alternative < self.alternative_count,
            "matrix position ({}, {}) outside {}x{}",
            criterion,
            alternative,
            self.criterion_count,
            self.alternative_count
        );
        criterion * self.alternative_count + alternative
    }

    /// Stores a measurement, returning the one it replaced (last write wins).
    pub fn set(
        &mut self,
        criterion: usize,
        alternative: usize,
        value: Interval,
    ) -> Option<Interval> {
        let offset = self.offset(criterion, alternative);
        self.cells[offset].replace(value)
    }

    pub fn get(&self, criterion: usize, alternative: usize) -> Option<Interval> {
        self.cells[self.offset(criterion, alternative)]
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Checks that every (alternative, criterion) pair has a measurement.
    ///
    /// Pairs are visited alternative by alternative, criteria in catalog order;
    /// the first gap is reported.
    pub fn validate(
        self,
        alternatives: &Catalog<Alternative>,
        criteria: &Catalog<Criterion>,
    ) -> Result<CompleteImpactMatrix, ModelError> {
        debug_assert_eq!(self.alternative_count, alternatives.len());
        debug_assert_eq!(self.criterion_count, criteria.len());

        for (a, alternative) in alternatives.iter().enumerate() {
            for (c, criterion) in criteria.iter().enumerate() {
                if self.get(c, a).is_none() {
                    return Err(ModelError::missing_measurement(
                        alternative.id.as_str(),
                        criterion.id.as_str(),
                    ));
                }
            }
        }

        let cells = self.cells.into_iter().flatten().collect();
        Ok(CompleteImpactMatrix {
            alternative_count: self.alternative_count,
            criterion_count: self.criterion_count,
            cells,
        })
    }
}

/// An impact matrix with a measurement for every pair. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteImpactMatrix {
    alternative_count: usize,
    criterion_count: usize,
    cells: Vec<Interval>,
}

impl CompleteImpactMatrix {
    pub fn measurement(&self, criterion: usize, alternative: usize) -> Interval {
        assert!(criterion < self.criterion_count && alternative < self.alternative_count);
        self.cells[criterion * self.alternative_count + alternative]
    }

    pub fn alternative_count(&self) -> usize {
        self.alternative_count
    }

    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }
}
