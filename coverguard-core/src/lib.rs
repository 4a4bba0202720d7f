//! Core coverage engine for CoverGuard
//!
//! Decides whether a set of cameras, each with an operating range for
//! distance and for light level, jointly covers a desired operating envelope.
//! Designed for edge devices with limited resources.
//!
//! Key constraints:
//! - Pure and synchronous: no I/O, no global state
//! - O(n log n) per evaluation, well under a millisecond for 10k cameras
//! - Caller data is never reordered or mutated
//!
//! ```no_run
//! use coverguard_core::{is_coverage_sufficient, CameraDevice, Range};
//!
//! let cameras = [
//!     CameraDevice::new(Range::new(1.0, 5.0), Range::new(100.0, 600.0)),
//!     CameraDevice::new(Range::new(5.0, 10.0), Range::new(500.0, 1000.0)),
//! ];
//!
//! match is_coverage_sufficient(Range::new(1.0, 10.0), Range::new(100.0, 1000.0), &cameras) {
//!     Ok(true) => {},  // Envelope covered
//!     Ok(false) => {}, // Gap on at least one axis
//!     Err(e) => {},    // Malformed range from the caller
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod constants;
pub mod countdown;
pub mod coverage;
pub mod deadline;
pub mod device;
pub mod envelope;
pub mod errors;
pub mod presets;
pub mod range;
pub mod traits;

// Public API
pub use coverage::{is_coverage_sufficient, AxisCoverage, CoverageEvaluator, CoverageReport};
pub use countdown::{ClockTime, Countdown, ProgressBand, Tick};
pub use deadline::Deadline;
pub use device::{Axis, CameraDevice};
pub use envelope::DesiredEnvelope;
pub use errors::{CoverageError, CoverageResult};
pub use presets::CoverageScenario;
pub use range::Range;
pub use traits::Validate;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
