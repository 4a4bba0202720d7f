//! Basic Coverage Example
//!
//! This example demonstrates the simplest use case of CoverGuard:
//! checking whether a handful of cameras cover a desired envelope.
//!
//! ## What You'll Learn
//!
//! - Describing cameras and the envelope with ranges
//! - Asking for a yes/no answer
//! - Reading the per-axis report to find the gap
//! - Handling an invalid range
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_coverage
//! ```

use coverguard_core::{
    is_coverage_sufficient, CameraDevice, CoverageError, CoverageEvaluator, CoverageScenario,
    Range,
};

fn main() {
    println!("CoverGuard Basic Coverage Example");
    println!("=================================\n");

    for scenario in CoverageScenario::all() {
        println!("Scenario: {}", scenario.name);
        println!(
            "  Desired distance: [{}, {}] m",
            scenario.envelope.distance.min, scenario.envelope.distance.max
        );
        println!(
            "  Desired light:    [{}, {}] lx",
            scenario.envelope.light_level.min, scenario.envelope.light_level.max
        );
        for (i, cam) in scenario.devices.iter().enumerate() {
            println!(
                "  Camera {}: distance [{}, {}] m, light [{}, {}] lx",
                i + 1,
                cam.distance_range.min,
                cam.distance_range.max,
                cam.light_level_range.min,
                cam.light_level_range.max
            );
        }

        match CoverageEvaluator::new().evaluate(&scenario.envelope, &scenario.devices) {
            Ok(report) if report.is_sufficient() => println!("  ✓ Coverage sufficient\n"),
            Ok(report) => {
                println!("  ✗ Coverage insufficient");
                for axis in report.uncovered_axes() {
                    println!(
                        "    {} gap starts at {}",
                        axis.name(),
                        report.axis(axis).frontier
                    );
                }
                println!();
            }
            Err(e) => println!("  ✗ {}\n", e),
        }
    }

    println!("Invalid input:");
    let cameras = [CameraDevice::new(Range::new(8.0, 2.0), Range::new(0.0, 1000.0))];
    match is_coverage_sufficient(Range::new(1.0, 10.0), Range::new(100.0, 900.0), &cameras) {
        Ok(sufficient) => println!("  unexpected result: {}", sufficient),
        Err(CoverageError::InvalidRange { min, max }) => {
            println!("  ✗ Camera range [{}, {}] is inverted", min, max)
        }
    }
}
