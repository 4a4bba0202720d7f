//! Common test utilities and camera generators for integration tests
//!
//! This module provides:
//! - Camera set generators (contiguous tilings, gapped tilings, redundant sets)
//! - Deterministic shuffling for order-independence checks
//! - A small timer for performance assertions

#![allow(dead_code)]

use std::time::{Duration, Instant};

use coverguard_core::{CameraDevice, Range};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Light range wide enough to never be the limiting axis
pub const WIDE_LIGHT: Range = Range::new(0.0, 1_000_000.0);

/// Camera with the given distance range and a light range that covers anything
pub fn distance_camera(min: f64, max: f64) -> CameraDevice {
    CameraDevice::new(Range::new(min, max), WIDE_LIGHT)
}

/// Camera with explicit ranges on both axes
pub fn camera(distance: (f64, f64), light: (f64, f64)) -> CameraDevice {
    CameraDevice::new(distance.into(), light.into())
}

/// `count` cameras tiling `[start, start + count * width]` edge to edge
pub fn contiguous_tiling(start: f64, width: f64, count: usize) -> Vec<CameraDevice> {
    (0..count)
        .map(|i| {
            let min = start + i as f64 * width;
            distance_camera(min, min + width)
        })
        .collect()
}

/// Cameras covering `[2i, 2i + 1]`, leaving a unit gap after each
pub fn alternating_gaps(count: usize) -> Vec<CameraDevice> {
    (0..count)
        .map(|i| {
            let base = (i * 2) as f64;
            camera((base, base + 1.0), (i as f64 * 200.0, i as f64 * 200.0 + 100.0))
        })
        .collect()
}

/// Copy of `cameras` in a seeded random order
pub fn shuffled(cameras: &[CameraDevice], seed: u64) -> Vec<CameraDevice> {
    let mut copy = cameras.to_vec();
    copy.shuffle(&mut StdRng::seed_from_u64(seed));
    copy
}

/// Wall-clock timer for coarse performance bounds
pub struct TestTimer {
    start: Instant,
}

impl TestTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
