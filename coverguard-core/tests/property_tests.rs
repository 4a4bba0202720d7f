//! Property tests for coverage evaluation
//!
//! Random camera sets checked against properties that must hold for any
//! input, rather than a fixed table of cases.

mod common;

use coverguard_core::{is_coverage_sufficient, CameraDevice, CoverageError, Range};
use proptest::prelude::*;

use common::{camera, distance_camera, WIDE_LIGHT};

/// Valid range with integer-ish bounds in [-100, 100]
fn valid_range() -> impl Strategy<Value = Range> {
    (-100i32..=100, 0i32..=50).prop_map(|(min, width)| Range::new(min as f64, (min + width) as f64))
}

fn valid_camera() -> impl Strategy<Value = CameraDevice> {
    (valid_range(), valid_range()).prop_map(|(distance, light)| CameraDevice::new(distance, light))
}

proptest! {
    #[test]
    fn order_independent(
        target_d in valid_range(),
        target_l in valid_range(),
        (cams, reordered) in prop::collection::vec(valid_camera(), 0..24)
            .prop_flat_map(|cams| (Just(cams.clone()), Just(cams).prop_shuffle())),
    ) {
        prop_assert_eq!(
            is_coverage_sufficient(target_d, target_l, &cams),
            is_coverage_sufficient(target_d, target_l, &reordered)
        );
    }

    #[test]
    fn containing_camera_always_suffices(
        target_d in valid_range(),
        target_l in valid_range(),
        slack in 0.0f64..10.0,
        mut others in prop::collection::vec(valid_camera(), 0..8),
        position in 0usize..8,
    ) {
        let covering = camera(
            (target_d.min - slack, target_d.max + slack),
            (target_l.min - slack, target_l.max + slack),
        );
        let position = position.min(others.len());
        others.insert(position, covering);

        prop_assert_eq!(is_coverage_sufficient(target_d, target_l, &others), Ok(true));
    }

    #[test]
    fn empty_set_never_suffices(target_d in valid_range(), target_l in valid_range()) {
        prop_assert_eq!(is_coverage_sufficient(target_d, target_l, &[]), Ok(false));
    }

    #[test]
    fn split_at_any_point_covers(min in -100i32..100, width in 1i32..100, cut in 0.0f64..1.0) {
        let (min, max) = (min as f64, (min + width) as f64);
        let split = min + (max - min) * cut;
        let cams = [distance_camera(split, max), distance_camera(min, split)];

        prop_assert_eq!(is_coverage_sufficient(Range::new(min, max), WIDE_LIGHT, &cams), Ok(true));
    }

    #[test]
    fn positive_gap_never_covers(min in -100i32..100, width in 4i32..100, gap in 0.5f64..2.0) {
        let (min, max) = (min as f64, (min + width) as f64);
        let mid = min + (width / 2) as f64;
        let cams = [distance_camera(min, mid), distance_camera(mid + gap, max)];

        prop_assert_eq!(is_coverage_sufficient(Range::new(min, max), WIDE_LIGHT, &cams), Ok(false));
    }

    #[test]
    fn inverted_range_reported_verbatim(
        low in -100i32..100,
        delta in 1i32..50,
        cams in prop::collection::vec(valid_camera(), 0..8),
    ) {
        let (min, max) = ((low + delta) as f64, low as f64);
        let mut cams = cams;
        cams.push(distance_camera(min, max));

        prop_assert_eq!(
            is_coverage_sufficient(Range::new(0.0, 1.0), Range::new(0.0, 1.0), &cams),
            Err(CoverageError::InvalidRange { min, max })
        );
    }
}
