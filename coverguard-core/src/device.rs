//! Camera devices and the axes they are evaluated on

use crate::{errors::CoverageResult, range::Range, traits::Validate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One hardware camera's operating envelope
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CameraDevice {
    /// Working distance the camera can focus over
    pub distance_range: Range,

    /// Light levels the camera can expose for
    pub light_level_range: Range,
}

impl CameraDevice {
    /// Create a camera from its two operating ranges
    pub const fn new(distance_range: Range, light_level_range: Range) -> Self {
        Self {
            distance_range,
            light_level_range,
        }
    }

    /// The camera's range on `axis`
    pub fn range(&self, axis: Axis) -> Range {
        match axis {
            Axis::Distance => self.distance_range,
            Axis::LightLevel => self.light_level_range,
        }
    }
}

impl Validate for CameraDevice {
    fn validate(&self) -> CoverageResult<()> {
        self.distance_range.validate()?;
        self.light_level_range.validate()
    }
}

/// Independent dimension a coverage check runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Axis {
    /// Subject distance
    Distance,
    /// Ambient light level
    LightLevel,
}

impl Axis {
    /// Both axes, in evaluation order
    pub const ALL: [Axis; 2] = [Axis::Distance, Axis::LightLevel];

    /// Human-readable axis name
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Distance => "distance",
            Axis::LightLevel => "light level",
        }
    }
}
