//! Constants for CoverGuard Core
//!
//! Centralized numeric values used by the countdown, deadline and preset
//! modules. Names include units where there are any.
//!
//! ## Organization
//!
//! - **Time**: Clock conversions, deadline bounds, progress band cut-offs
//! - **Scenarios**: Envelopes and camera ranges for the built-in presets

/// Clock conversions, deadline bounds and countdown thresholds.
pub mod time;

/// Numbers behind the built-in coverage scenarios.
pub mod scenarios;

// Re-export commonly used constants for convenience
pub use time::{
    DEADLINE_MAX_SECONDS, DEADLINE_MIN_SECONDS, MINUTES_PER_HOUR, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
