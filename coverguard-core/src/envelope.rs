//! The operating envelope an installation must cover

use crate::{device::Axis, errors::CoverageResult, range::Range, traits::Validate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Desired distance and light-level ranges
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DesiredEnvelope {
    /// Distances that must be in focus
    pub distance: Range,

    /// Light levels that must be exposable
    pub light_level: Range,
}

impl DesiredEnvelope {
    /// Create an envelope from its two ranges
    pub const fn new(distance: Range, light_level: Range) -> Self {
        Self {
            distance,
            light_level,
        }
    }

    /// The desired range on `axis`
    pub fn range(&self, axis: Axis) -> Range {
        match axis {
            Axis::Distance => self.distance,
            Axis::LightLevel => self.light_level,
        }
    }
}

impl Validate for DesiredEnvelope {
    fn validate(&self) -> CoverageResult<()> {
        self.distance.validate()?;
        self.light_level.validate()
    }
}
