//! JSON Documents for Coverage Requests
//!
//! ## Overview
//!
//! The coverage engine in `coverguard-core` works on typed values. Forms,
//! config files and other services speak JSON. This crate is the boundary
//! between the two: it parses a coverage request, runs the evaluator, and
//! renders the answer.
//!
//! ## Request Format
//!
//! Field names follow the form that produces them (camelCase):
//!
//! ```json
//! {
//!   "desiredDistanceRange": { "min": 2.0, "max": 8.0 },
//!   "desiredLightLevelRange": { "min": 200, "max": 800 },
//!   "cameras": [
//!     { "distanceRange": { "min": 1.0, "max": 9.0 },
//!       "lightLevelRange": { "min": 150, "max": 850 } }
//!   ]
//! }
//! ```
//!
//! `cameras` may be omitted, which is the same as an empty list.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "isCoverageSufficient": false,
//!   "distance": { "covered": false, "frontier": 3.0 },
//!   "lightLevel": { "covered": true, "frontier": 1000.0 }
//! }
//! ```
//!
//! `frontier` is where the scan stopped on that axis; for an uncovered axis
//! it is the first point no camera reaches.
//!
//! ## Scenario Registry
//!
//! Named requests ship inside the crate (see [`registry`]), so demos and
//! smoke tests need no files on disk.
//!
//! ## Usage Example
//!
//! ```rust
//! use coverguard_schemas::CoverageRequest;
//!
//! let request = CoverageRequest::from_json(r#"{
//!     "desiredDistanceRange": { "min": 1, "max": 10 },
//!     "desiredLightLevelRange": { "min": 100, "max": 1000 },
//!     "cameras": [
//!         { "distanceRange": { "min": 1, "max": 5 }, "lightLevelRange": { "min": 100, "max": 500 } },
//!         { "distanceRange": { "min": 5, "max": 10 }, "lightLevelRange": { "min": 500, "max": 1000 } }
//!     ]
//! }"#)?;
//!
//! let response = request.evaluate()?;
//! assert!(response.is_coverage_sufficient);
//! # Ok::<(), coverguard_schemas::SchemaError>(())
//! ```

use std::path::Path;

use coverguard_core::{
    AxisCoverage, CameraDevice, CoverageError, CoverageEvaluator, CoverageReport,
    CoverageScenario, Deadline, DesiredEnvelope, Range,
};
use serde::{Deserialize, Serialize};

pub mod registry;

pub use registry::{ScenarioRegistry, GLOBAL_REGISTRY};

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("Failed to read document: {0}")]
    Io(String),

    #[error("Scenario not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRange(#[from] CoverageError),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::ParseError(err.to_string())
    }
}

/// Coverage question as submitted by a form or config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRequest {
    /// Distances that must be in focus
    pub desired_distance_range: Range,

    /// Light levels that must be exposable
    pub desired_light_level_range: Range,

    /// Available cameras
    #[serde(default)]
    pub cameras: Vec<CameraDevice>,
}

impl CoverageRequest {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a request from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Render the request as JSON
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Desired ranges as an envelope
    pub fn envelope(&self) -> DesiredEnvelope {
        DesiredEnvelope::new(self.desired_distance_range, self.desired_light_level_range)
    }

    /// Run the evaluator on this request
    pub fn evaluate(&self) -> Result<CoverageResponse, SchemaError> {
        let report = CoverageEvaluator::new().evaluate(&self.envelope(), &self.cameras)?;
        Ok(report.into())
    }
}

impl From<CoverageScenario> for CoverageRequest {
    fn from(scenario: CoverageScenario) -> Self {
        Self {
            desired_distance_range: scenario.envelope.distance,
            desired_light_level_range: scenario.envelope.light_level,
            cameras: scenario.devices,
        }
    }
}

/// Answer to a [`CoverageRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResponse {
    /// Both axes covered
    pub is_coverage_sufficient: bool,

    /// Distance axis outcome
    pub distance: AxisCoverage,

    /// Light-level axis outcome
    pub light_level: AxisCoverage,
}

impl CoverageResponse {
    /// Render the response as JSON
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<CoverageReport> for CoverageResponse {
    fn from(report: CoverageReport) -> Self {
        Self {
            is_coverage_sufficient: report.is_sufficient(),
            distance: report.distance,
            light_level: report.light_level,
        }
    }
}

/// Render a deadline as `{"secondsLeft": n}`
pub fn deadline_json(deadline: &Deadline) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(deadline)?)
}
