//! Random countdown deadlines
//!
//! A deadline is just a number of seconds left. The generator draws it
//! uniformly from [`DEADLINE_MIN_SECONDS`, `DEADLINE_MAX_SECONDS`] using any
//! `rand::Rng`, so tests can pass a seeded generator.
//!
//! With `serde`, a deadline serialises as `{"secondsLeft": 142}`.

use rand::Rng;

use crate::{
    constants::time::{DEADLINE_MAX_SECONDS, DEADLINE_MIN_SECONDS},
    countdown::ClockTime,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds left until a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Deadline {
    /// Whole seconds remaining
    pub seconds_left: u32,
}

impl Deadline {
    /// Deadline `seconds_left` seconds away
    pub const fn new(seconds_left: u32) -> Self {
        Self { seconds_left }
    }

    /// Draw a deadline between one and five minutes away, bounds included
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(DEADLINE_MIN_SECONDS..=DEADLINE_MAX_SECONDS))
    }

    /// [`Deadline::random`] with the thread-local generator
    #[cfg(feature = "std")]
    pub fn generate() -> Self {
        Self::random(&mut rand::thread_rng())
    }

    /// Stopwatch fields for this deadline
    pub fn clock_time(&self) -> ClockTime {
        ClockTime::from_total_seconds(self.seconds_left)
    }
}
