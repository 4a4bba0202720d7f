//! Core traits for coverage inputs
//!
//! Every value that carries ranges can check itself before the evaluator
//! touches it. Keep this simple - the evaluator only needs a yes or an error.

use crate::errors::CoverageResult;

/// Trait for inputs that must be checked before evaluation
pub trait Validate {
    /// Return the first invalid range found, if any
    fn validate(&self) -> CoverageResult<()>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> CoverageResult<()> {
        self.iter().try_for_each(Validate::validate)
    }
}
