//! Built-in coverage scenarios
//!
//! Ready-made envelopes and camera sets, handy for demos and smoke tests.
//! Build your own with [`CoverageScenario::new`].
//!
//! ```rust
//! use coverguard_core::CoverageScenario;
//!
//! assert_eq!(CoverageScenario::full_coverage().evaluate(), Ok(true));
//! assert_eq!(CoverageScenario::insufficient_coverage().evaluate(), Ok(false));
//! ```

use alloc::vec::Vec;

use crate::{
    constants::scenarios::{
        FULL_CAMERAS, FULL_DISTANCE_M, FULL_LIGHT_LX, INSUFFICIENT_CAMERAS,
        INSUFFICIENT_DISTANCE_M, INSUFFICIENT_LIGHT_LX,
    },
    coverage::{CoverageEvaluator, CoverageReport},
    device::CameraDevice,
    envelope::DesiredEnvelope,
    errors::CoverageResult,
    range::Range,
};

/// A named envelope plus the cameras meant to cover it
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageScenario {
    /// Short identifier
    pub name: &'static str,

    /// What must be covered
    pub envelope: DesiredEnvelope,

    /// Available cameras
    pub devices: Vec<CameraDevice>,
}

impl CoverageScenario {
    /// Create a scenario from its parts
    pub fn new(name: &'static str, envelope: DesiredEnvelope, devices: Vec<CameraDevice>) -> Self {
        Self {
            name,
            envelope,
            devices,
        }
    }

    /// One camera spans everything; the others are redundant
    pub fn full_coverage() -> Self {
        Self::from_table("full_coverage", FULL_DISTANCE_M, FULL_LIGHT_LX, &FULL_CAMERAS)
    }

    /// Three cameras leave gaps on both axes
    pub fn insufficient_coverage() -> Self {
        Self::from_table(
            "insufficient_coverage",
            INSUFFICIENT_DISTANCE_M,
            INSUFFICIENT_LIGHT_LX,
            &INSUFFICIENT_CAMERAS,
        )
    }

    /// Every built-in scenario
    pub fn all() -> [Self; 2] {
        [Self::full_coverage(), Self::insufficient_coverage()]
    }

    /// Whether the cameras cover the envelope
    pub fn evaluate(&self) -> CoverageResult<bool> {
        self.report().map(|report| report.is_sufficient())
    }

    /// Per-axis outcome for this scenario
    pub fn report(&self) -> CoverageResult<CoverageReport> {
        CoverageEvaluator::new().evaluate(&self.envelope, &self.devices)
    }

    fn from_table(
        name: &'static str,
        distance: (f64, f64),
        light: (f64, f64),
        cameras: &[((f64, f64), (f64, f64))],
    ) -> Self {
        let devices = cameras
            .iter()
            .map(|&(distance, light)| CameraDevice::new(distance.into(), light.into()))
            .collect();

        Self::new(
            name,
            DesiredEnvelope::new(Range::from(distance), Range::from(light)),
            devices,
        )
    }
}
