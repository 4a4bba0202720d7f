//! Error Types for Coverage Evaluation
//!
//! ## Design Philosophy
//!
//! The coverage engine has exactly one way to fail: the caller handed it a
//! range whose minimum exceeds its maximum. Everything else is a well-defined
//! `true`/`false` answer.
//!
//! 1. **Small Size**: The error carries two `f64` values and nothing else, so
//!    it is `Copy` and cheap to return from the hot path.
//!
//! 2. **No Heap Allocation**: No `String` payloads. The offending values are
//!    enough for a UI to point at the bad field.
//!
//! 3. **Fail Before Computing**: Every range is validated before any coverage
//!    work starts. An error is never returned alongside a partial result.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use coverguard_core::{is_coverage_sufficient, CameraDevice, CoverageError, Range};
//!
//! let cameras = [CameraDevice::new(Range::new(9.0, 1.0), Range::new(0.0, 100.0))];
//!
//! match is_coverage_sufficient(Range::new(1.0, 5.0), Range::new(0.0, 50.0), &cameras) {
//!     Ok(sufficient) => {
//!         // show_result(sufficient);
//!     }
//!     Err(CoverageError::InvalidRange { min, max }) => {
//!         assert_eq!((min, max), (9.0, 1.0));
//!         // highlight_field(min, max);
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for coverage operations
pub type CoverageResult<T> = Result<T, CoverageError>;

/// Coverage errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoverageError {
    /// A range with `min > max` (or a NaN endpoint) was supplied
    #[error("Invalid range: min ({min}) should not exceed max ({max}).")]
    InvalidRange {
        /// Lower bound of the offending range
        min: f64,
        /// Upper bound of the offending range
        max: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for CoverageError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidRange { min, max } =>
                defmt::write!(fmt, "Invalid range [{}, {}]", min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn message_names_both_bounds() {
        let err = CoverageError::InvalidRange { min: 7.5, max: 2.0 };
        assert_eq!(
            err.to_string(),
            "Invalid range: min (7.5) should not exceed max (2)."
        );
    }
}
