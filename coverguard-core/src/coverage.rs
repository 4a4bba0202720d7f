//! Camera Coverage Evaluation
//!
//! ## Overview
//!
//! An installation needs a set of cameras that, between them, can focus over
//! every distance in a desired range and expose for every light level in a
//! desired range. This module answers that question.
//!
//! The two axes are independent. Distance coverage is decided over every
//! camera's distance range, light coverage over every camera's light range,
//! and the envelope is covered only if both are. Different cameras may close
//! the gaps on different axes.
//!
//! ## Greedy Frontier Scan
//!
//! Per axis, the camera ranges are copied and sorted by lower bound, then
//! swept once while tracking the *frontier*: the end of the contiguous covered
//! stretch that starts at the desired minimum.
//!
//! ```text
//! desired:        [1 ─────────────────────── 10]
//! sorted ranges:  [1 ──── 5]
//!                          [5 ─────── 9]
//!                                 [7 ──────── 10]
//! frontier:  1 → 5 → 9 → 10 ✓
//! ```
//!
//! A range whose lower bound lies beyond the frontier leaves a gap. Since the
//! ranges are sorted, nothing after it starts any earlier, so the scan stops.
//! As soon as the frontier reaches the desired maximum the axis is covered
//! and the remaining ranges are not looked at.
//!
//! The frontier starts at the desired minimum, so a single-point target is
//! covered by the first range that starts at or below it. An empty camera
//! list is never sufficient.
//!
//! ## Complexity
//!
//! - Sort: O(n log n) per axis
//! - Scan: O(n) per axis
//! - Memory: one `Vec<Range>` of n entries, reused for both axes
//!
//! ## Usage Example
//!
//! ```rust
//! use coverguard_core::{CameraDevice, CoverageEvaluator, DesiredEnvelope, Range, Axis};
//!
//! let envelope = DesiredEnvelope::new(Range::new(1.0, 10.0), Range::new(100.0, 1000.0));
//! let cameras = [
//!     CameraDevice::new(Range::new(1.0, 4.0), Range::new(100.0, 1000.0)),
//!     CameraDevice::new(Range::new(6.0, 10.0), Range::new(100.0, 1000.0)),
//! ];
//!
//! let report = CoverageEvaluator::new().evaluate(&envelope, &cameras)?;
//! assert!(!report.is_sufficient());
//! assert_eq!(report.distance.frontier, 4.0); // gap starts here
//! assert!(report.light_level.covered);
//! assert_eq!(report.uncovered_axes().collect::<Vec<_>>(), vec![Axis::Distance]);
//! # Ok::<(), coverguard_core::CoverageError>(())
//! ```

use alloc::vec::Vec;

use crate::{
    device::{Axis, CameraDevice},
    envelope::DesiredEnvelope,
    errors::CoverageResult,
    range::Range,
    traits::Validate,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of the scan on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisCoverage {
    /// The desired range is fully covered on this axis
    pub covered: bool,

    /// Where the scan stopped. When not covered, the first uncovered point.
    pub frontier: f64,
}

/// Per-axis outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoverageReport {
    /// Distance axis outcome
    pub distance: AxisCoverage,

    /// Light-level axis outcome
    pub light_level: AxisCoverage,
}

impl CoverageReport {
    /// Both axes covered
    pub fn is_sufficient(&self) -> bool {
        self.distance.covered && self.light_level.covered
    }

    /// Outcome on `axis`
    pub fn axis(&self, axis: Axis) -> AxisCoverage {
        match axis {
            Axis::Distance => self.distance,
            Axis::LightLevel => self.light_level,
        }
    }

    /// Axes left with a gap, in evaluation order
    pub fn uncovered_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL
            .into_iter()
            .filter(move |axis| !self.axis(*axis).covered)
    }
}

/// Stateless coverage evaluator
///
/// Holds no data between calls, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageEvaluator;

impl CoverageEvaluator {
    /// Create an evaluator
    pub const fn new() -> Self {
        Self
    }

    /// Decide whether `devices` cover both desired ranges
    ///
    /// Fails with [`CoverageError::InvalidRange`](crate::CoverageError) for
    /// the first range with `min > max`, checked in the order: desired
    /// distance, desired light level, then each device.
    pub fn is_coverage_sufficient(
        &self,
        desired_distance_range: Range,
        desired_light_level_range: Range,
        devices: &[CameraDevice],
    ) -> CoverageResult<bool> {
        let envelope = DesiredEnvelope::new(desired_distance_range, desired_light_level_range);
        self.evaluate(&envelope, devices)
            .map(|report| report.is_sufficient())
    }

    /// Full per-axis report for `envelope`
    pub fn evaluate(
        &self,
        envelope: &DesiredEnvelope,
        devices: &[CameraDevice],
    ) -> CoverageResult<CoverageReport> {
        envelope.validate()?;
        devices.validate()?;

        let mut scratch = Vec::with_capacity(devices.len());

        let distance = Self::cover_axis(envelope, devices, Axis::Distance, &mut scratch);
        let light_level = Self::cover_axis(envelope, devices, Axis::LightLevel, &mut scratch);

        Ok(CoverageReport {
            distance,
            light_level,
        })
    }

    fn cover_axis(
        envelope: &DesiredEnvelope,
        devices: &[CameraDevice],
        axis: Axis,
        scratch: &mut Vec<Range>,
    ) -> AxisCoverage {
        scratch.clear();
        scratch.extend(devices.iter().map(|device| device.range(axis)));

        let outcome = cover_range(envelope.range(axis), scratch);

        log_debug!(
            "{} axis: covered={} frontier={} ({} cameras)",
            axis.name(),
            outcome.covered,
            outcome.frontier,
            devices.len()
        );

        outcome
    }
}

/// Decide whether `ranges` jointly cover `target`
///
/// All ranges are assumed valid. `ranges` is used as the sort buffer and is
/// left sorted by lower bound.
pub fn cover_range(target: Range, ranges: &mut [Range]) -> AxisCoverage {
    let mut frontier = target.min;

    // No cameras never counts as coverage, not even for a single point
    if ranges.is_empty() {
        return AxisCoverage {
            covered: false,
            frontier,
        };
    }

    ranges.sort_unstable_by(|a, b| a.min.total_cmp(&b.min));

    for range in ranges.iter() {
        if range.min > frontier {
            log_trace!("gap between {} and {}", frontier, range.min);
            break;
        }

        frontier = frontier.max(range.max);

        if frontier >= target.max {
            return AxisCoverage {
                covered: true,
                frontier,
            };
        }
    }

    AxisCoverage {
        covered: false,
        frontier,
    }
}

/// Decide whether `devices` cover both desired ranges
///
/// Shorthand for [`CoverageEvaluator::is_coverage_sufficient`].
pub fn is_coverage_sufficient(
    desired_distance_range: Range,
    desired_light_level_range: Range,
    devices: &[CameraDevice],
) -> CoverageResult<bool> {
    CoverageEvaluator::new().is_coverage_sufficient(
        desired_distance_range,
        desired_light_level_range,
        devices,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoverageError;
    use alloc::vec;

    fn cam(distance: (f64, f64), light: (f64, f64)) -> CameraDevice {
        CameraDevice::new(distance.into(), light.into())
    }

    fn wide_light(distance: (f64, f64)) -> CameraDevice {
        cam(distance, (0.0, 10_000.0))
    }

    const LIGHT: Range = Range::new(100.0, 1000.0);

    #[test]
    fn gap_between_ranges() {
        let cams = [wide_light((1.0, 4.0)), wide_light((6.0, 10.0))];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(false));
    }

    #[test]
    fn touching_ranges() {
        let cams = [wide_light((1.0, 5.0)), wide_light((5.0, 10.0))];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
    }

    #[test]
    fn overlapping_ranges() {
        let cams = [wide_light((1.0, 6.0)), wide_light((5.0, 10.0))];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
    }

    #[test]
    fn empty_device_list() {
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &[]), Ok(false));
        assert_eq!(
            is_coverage_sufficient(Range::point(5.0), Range::point(500.0), &[]),
            Ok(false)
        );
    }

    #[test]
    fn exact_match() {
        let cams = [cam((1.0, 10.0), (100.0, 1000.0))];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
    }

    #[test]
    fn one_axis_short() {
        let cams = [cam((1.0, 10.0), (100.0, 900.0))];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(false));
    }

    #[test]
    fn axes_closed_by_different_cameras() {
        // Camera A spans distance but only half the light range; B the reverse.
        let cams = [
            cam((1.0, 10.0), (100.0, 500.0)),
            cam((1.0, 3.0), (500.0, 1000.0)),
        ];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
    }

    #[test]
    fn fine_gap_detected() {
        let target = Range::new(1.0, 1.000_000_01);
        let cams = [wide_light((1.0, 1.0))];
        assert_eq!(is_coverage_sufficient(target, LIGHT, &cams), Ok(false));
    }

    #[test]
    fn degenerate_target() {
        let target = Range::point(5.0);

        let containing = [wide_light((4.0, 6.0))];
        assert_eq!(is_coverage_sufficient(target, LIGHT, &containing), Ok(true));

        // Frontier starts at the point, any range starting at or below it reaches it
        let below = [wide_light((0.0, 1.0))];
        assert_eq!(is_coverage_sufficient(target, LIGHT, &below), Ok(true));

        let above = [wide_light((7.0, 9.0))];
        assert_eq!(is_coverage_sufficient(target, LIGHT, &above), Ok(false));

        let touching = [wide_light((0.0, 5.0))];
        assert_eq!(is_coverage_sufficient(target, LIGHT, &touching), Ok(true));
    }

    #[test]
    fn ranges_below_target_are_ignored() {
        let cams = [
            wide_light((-10.0, -5.0)),
            wide_light((0.0, 0.5)),
            wide_light((1.0, 10.0)),
        ];
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
    }

    #[test]
    fn invalid_desired_range_reported() {
        assert_eq!(
            is_coverage_sufficient(Range::new(10.0, 1.0), LIGHT, &[wide_light((0.0, 20.0))]),
            Err(CoverageError::InvalidRange { min: 10.0, max: 1.0 })
        );
        assert_eq!(
            is_coverage_sufficient(Range::new(1.0, 10.0), Range::new(5.0, 4.0), &[]),
            Err(CoverageError::InvalidRange { min: 5.0, max: 4.0 })
        );
    }

    #[test]
    fn invalid_device_range_reported() {
        let cams = [wide_light((1.0, 10.0)), cam((1.0, 10.0), (700.0, 300.0))];
        assert_eq!(
            is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams),
            Err(CoverageError::InvalidRange { min: 700.0, max: 300.0 })
        );
    }

    #[test]
    fn caller_order_untouched() {
        let cams = vec![wide_light((5.0, 10.0)), wide_light((1.0, 5.0))];
        let before = cams.clone();
        assert_eq!(is_coverage_sufficient(Range::new(1.0, 10.0), LIGHT, &cams), Ok(true));
        assert_eq!(cams, before);
    }

    #[test]
    fn report_frontier_marks_gap() {
        let envelope = DesiredEnvelope::new(Range::new(1.0, 10.0), LIGHT);
        let cams = [cam((1.0, 4.0), (100.0, 300.0)), cam((6.0, 10.0), (300.0, 1000.0))];

        let report = CoverageEvaluator::new().evaluate(&envelope, &cams).unwrap();
        assert_eq!(report.distance, AxisCoverage { covered: false, frontier: 4.0 });
        assert_eq!(report.light_level, AxisCoverage { covered: true, frontier: 1000.0 });
        assert!(!report.is_sufficient());
    }

    #[test]
    fn cover_range_short_circuits() {
        let mut ranges = [
            Range::new(9.0, 20.0),
            Range::new(0.0, 12.0),
            Range::new(11.0, 30.0),
        ];
        let outcome = cover_range(Range::new(1.0, 10.0), &mut ranges);
        assert_eq!(outcome, AxisCoverage { covered: true, frontier: 12.0 });
    }
}
