//! Interval value object.
//!
//! A measurement of an alternative on a criterion is either precise or an
//! imprecise range. Both are represented as a closed interval; a precise value
//! is the degenerate interval whose bounds coincide.

use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// A closed interval `[lower, upper]` of finite reals with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite or inverted bounds.
    pub fn try_new(lower: f64, upper: f64) -> Result<Self, ValidationError> {
        if !lower.is_finite() {
            return Err(ValidationError::non_finite("lower_bound", lower));
        }
        if !upper.is_finite() {
            return Err(ValidationError::non_finite("upper_bound", upper));
        }
        if lower > upper {
            return Err(ValidationError::InvertedBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Creates the degenerate interval `[value, value]`.
    pub fn point(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::non_finite("real", value));
        }
        Ok(Self {
            lower: value,
            upper: value,
        })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if the interval holds a single precise value.
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.lower)
        } else {
            write!(f, "[{}, {}]", self.lower, self.upper)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn point_is_degenerate() {
        let iv = Interval::point(3.0).unwrap();
        assert_eq!(iv.lower(), 3.0);
        assert_eq!(iv.upper(), 3.0);
        assert!(iv.is_point());
    }

    #[test]
    fn try_new_accepts_ordered_bounds() {
        let iv = Interval::try_new(1.0, 2.5).unwrap();
        assert_eq!(iv.lower(), 1.0);
        assert_eq!(iv.upper(), 2.5);
        assert!(!iv.is_point());
    }

    #[test]
    fn try_new_rejects_inverted_bounds() {
        let result = Interval::try_new(2.0, 1.0);
        assert_eq!(
            result,
            Err(ValidationError::InvertedBounds {
                lower: 2.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn try_new_rejects_nan_and_infinity() {
        assert!(matches!(
            Interval::try_new(f64::NAN, 1.0),
            Err(ValidationError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::try_new(0.0, f64::INFINITY),
            Err(ValidationError::NonFinite { .. })
        ));
        assert!(Interval::point(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn interval_displays_point_and_range() {
        assert_eq!(Interval::point(4.5).unwrap().to_string(), "4.5");
        assert_eq!(Interval::try_new(1.0, 2.0).unwrap().to_string(), "[1, 2]");
    }

    proptest! {
        #[test]
        fn ordered_finite_bounds_always_construct(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let iv = Interval::try_new(lo, hi).unwrap();
            prop_assert!(iv.lower() <= iv.upper());
            prop_assert_eq!(iv.lower(), lo);
            prop_assert_eq!(iv.upper(), hi);
        }

        #[test]
        fn strictly_inverted_bounds_never_construct(a in -1e9f64..1e9, d in 1e-6f64..1e6) {
            prop_assert!(Interval::try_new(a + d, a).is_err());
        }
    }
}
