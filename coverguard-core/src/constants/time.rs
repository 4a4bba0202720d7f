//! Time-Related Constants
//!
//! Conversion factors for the stopwatch and the bounds used when drawing a
//! random deadline.

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Highest value a minutes or seconds field takes after a borrow.
pub const CLOCK_FIELD_MAX: u32 = 59;

// ===== DEADLINE =====

/// Shortest deadline handed out (seconds).
///
/// One full minute, so the stopwatch always shows a non-zero minutes field.
pub const DEADLINE_MIN_SECONDS: u32 = 60;

/// Longest deadline handed out (seconds).
pub const DEADLINE_MAX_SECONDS: u32 = 300;

// ===== PROGRESS BANDS =====

/// Remaining share above which the countdown is in the `Plenty` band.
pub const PLENTY_FRACTION: f32 = 2.0 / 3.0;

/// Remaining share above which the countdown is in the `Warning` band.
pub const WARNING_FRACTION: f32 = 1.0 / 3.0;
