//! Closed intervals on a single scalar axis
//!
//! A [`Range`] is the building block of every coverage question: a camera's
//! working distance, the light levels it can expose for, and the envelope the
//! installer wants covered are all ranges.
//!
//! Ranges are plain values. Construction never fails; validity (`min <= max`)
//! is checked by the evaluator before use so the caller gets back the exact
//! values that were wrong.

use crate::{
    errors::{CoverageError, CoverageResult},
    traits::Validate,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    /// Lower bound (inclusive)
    pub min: f64,

    /// Upper bound (inclusive)
    pub max: f64,
}

impl Range {
    /// Create a range; no validation happens here
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate range covering a single value
    pub const fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// `min <= max`. NaN endpoints are never valid.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Length of the interval, zero for a point
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside the interval, bounds included
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Whether `other` lies entirely inside this interval
    pub fn contains_range(&self, other: &Range) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl Validate for Range {
    fn validate(&self) -> CoverageResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoverageError::InvalidRange {
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}
