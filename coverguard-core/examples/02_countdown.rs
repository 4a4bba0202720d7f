//! Countdown Example
//!
//! Draws a random deadline and walks the stopwatch and progress bands
//! through it without any real-time waiting.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_countdown
//! ```

use coverguard_core::{Countdown, Deadline, Tick};

fn main() {
    println!("CoverGuard Countdown Example");
    println!("============================\n");

    let deadline = Deadline::generate();
    println!("Deadline: {} seconds", deadline.seconds_left);

    let countdown = Countdown::new(deadline.seconds_left as f32);
    let mut clock = deadline.clock_time();
    let mut elapsed = 0u32;

    loop {
        if elapsed % 30 == 0 {
            println!(
                "  t={:3}s  {}  {:>5.1}%  {:?}",
                elapsed,
                clock,
                countdown.progress_ratio(elapsed as f32) * 100.0,
                countdown.band(elapsed as f32)
            );
        }

        if clock.tick() == Tick::Finished {
            break;
        }
        elapsed += 1;
    }

    println!("\nTimer finished after {} seconds", elapsed);
}
