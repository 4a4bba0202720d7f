//! Countdown arithmetic
//!
//! The clock and progress-ring logic behind the countdown widgets, kept free
//! of any timer or drawing code. Callers drive it: call [`ClockTime::tick`]
//! once per second, or ask a [`Countdown`] about an elapsed time.
//!
//! ```rust
//! use coverguard_core::{ClockTime, Tick};
//!
//! let mut clock = ClockTime::new(1, 0, 0);
//! assert_eq!(clock.tick(), Tick::Running);
//! assert_eq!(clock.format_hms().as_str(), "00:59:59");
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::constants::time::{
    CLOCK_FIELD_MAX, PLENTY_FRACTION, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, WARNING_FRACTION,
};

/// Formatted clock: three `u32` fields and two separators always fit
pub type ClockString = String<32>;

/// Result of advancing the clock by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second was taken off
    Running,
    /// The clock was already at zero; nothing changed
    Finished,
}

/// Hours, minutes and seconds left on a stopwatch
///
/// Fields are stored as given. `ClockTime::new(0, 0, 90)` counts down from
/// ninety seconds without first being normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    /// Whole hours
    pub hours: u32,
    /// Whole minutes
    pub minutes: u32,
    /// Whole seconds
    pub seconds: u32,
}

impl ClockTime {
    /// Create a clock from raw fields
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Split a second count into hours, minutes and seconds
    pub const fn from_total_seconds(total: u32) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Seconds left
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * u64::from(SECONDS_PER_HOUR)
            + u64::from(self.minutes) * u64::from(SECONDS_PER_MINUTE)
            + u64::from(self.seconds)
    }

    /// All fields are zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Take one second off, borrowing from minutes then hours
    pub fn tick(&mut self) -> Tick {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = CLOCK_FIELD_MAX;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = CLOCK_FIELD_MAX;
            self.seconds = CLOCK_FIELD_MAX;
        } else {
            return Tick::Finished;
        }
        Tick::Running
    }

    /// `HH:MM:SS` without allocating
    pub fn format_hms(&self) -> ClockString {
        let mut out = ClockString::new();
        // Capacity covers the widest possible output, u32::MAX hours included
        let written = write!(out, "{}", self);
        debug_assert!(written.is_ok());
        out
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// How much of a countdown is left, in thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// More than two thirds left
    Plenty,
    /// Between one and two thirds left
    Warning,
    /// One third or less left
    Critical,
}

/// Countdown over a fixed number of seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    /// Length of the countdown in seconds
    pub total_seconds: f32,
}

impl Countdown {
    /// Create a countdown; negative lengths are treated as zero
    pub fn new(total_seconds: f32) -> Self {
        Self {
            total_seconds: total_seconds.max(0.0),
        }
    }

    /// Seconds left after `elapsed` seconds, never negative
    pub fn remaining(&self, elapsed: f32) -> f32 {
        (self.total_seconds - elapsed).max(0.0)
    }

    /// Whole seconds left, rounded down
    pub fn remaining_whole_seconds(&self, elapsed: f32) -> u32 {
        libm::floorf(self.remaining(elapsed)) as u32
    }

    /// Nothing left
    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.remaining(elapsed) <= 0.0
    }

    /// Share of the countdown left, `1.0` at the start and `0.0` at the end
    pub fn progress_ratio(&self, elapsed: f32) -> f32 {
        if self.total_seconds <= 0.0 {
            return 0.0;
        }
        self.remaining(elapsed) / self.total_seconds
    }

    /// Which third of the countdown we are in
    pub fn band(&self, elapsed: f32) -> ProgressBand {
        let left = self.remaining_whole_seconds(elapsed) as f32;
        if left > self.total_seconds * PLENTY_FRACTION {
            ProgressBand::Plenty
        } else if left > self.total_seconds * WARNING_FRACTION {
            ProgressBand::Warning
        } else {
            ProgressBand::Critical
        }
    }
}
