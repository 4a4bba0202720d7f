//! Scenario Constants
//!
//! Envelopes and camera ranges for the two demonstration scenarios. Distances
//! are in metres, light levels in lux.

// ===== FULL COVERAGE =====

/// Desired distance for the full-coverage scenario (m).
pub const FULL_DISTANCE_M: (f64, f64) = (2.0, 8.0);

/// Desired light level for the full-coverage scenario (lx).
pub const FULL_LIGHT_LX: (f64, f64) = (200.0, 800.0);

/// Cameras for the full-coverage scenario: (distance m, light lx).
///
/// The first camera alone already spans the whole envelope.
pub const FULL_CAMERAS: [((f64, f64), (f64, f64)); 3] = [
    ((1.0, 9.0), (150.0, 850.0)),
    ((0.5, 3.0), (100.0, 300.0)),
    ((2.0, 8.0), (300.0, 900.0)),
];

// ===== INSUFFICIENT COVERAGE =====

/// Desired distance for the insufficient-coverage scenario (m).
pub const INSUFFICIENT_DISTANCE_M: (f64, f64) = (1.0, 10.0);

/// Desired light level for the insufficient-coverage scenario (lx).
pub const INSUFFICIENT_LIGHT_LX: (f64, f64) = (100.0, 1000.0);

/// Cameras for the insufficient-coverage scenario: (distance m, light lx).
///
/// Gaps at 3-4 m and 6-7 m, and at the matching light levels.
pub const INSUFFICIENT_CAMERAS: [((f64, f64), (f64, f64)); 3] = [
    ((0.5, 3.0), (100.0, 300.0)),
    ((4.0, 6.0), (400.0, 600.0)),
    ((7.0, 9.0), (700.0, 900.0)),
];
