//! Frame pacing
//!
//! Caps the loop at the target frame time and measures the delta handed to
//! the simulation.

use std::thread;
use std::time::Instant;

use crate::consts::FRAME_TARGET_TIME;

/// Paces the main loop and produces per-frame deltas
///
/// Holds the timestamp of the previous frame. One `tick` per loop
/// iteration; the sleep inside it is the only place the process yields.
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Sleep off whatever remains of this frame's budget, then return the
    /// seconds elapsed since the previous tick
    ///
    /// The delta is not clamped: a stall shows up as one oversized step.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_frame.elapsed();

        // checked_sub is Some only when 0 <= wait <= target
        if let Some(wait) = FRAME_TARGET_TIME.checked_sub(elapsed) {
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_enforces_frame_budget() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();

        // The sleep covers the rest of the budget, so the measured delta
        // can never come in under the target
        assert!(dt >= FRAME_TARGET_TIME.as_secs_f32());
    }

    #[test]
    fn test_tick_reports_full_elapsed_time_when_behind() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(50));

        let dt = clock.tick();

        // Already past the budget: no extra wait, the whole stall is
        // reported unclamped
        assert!(dt >= 0.05);
    }

    #[test]
    fn test_consecutive_ticks_each_measure_from_last() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();

        assert!(first >= FRAME_TARGET_TIME.as_secs_f32());
        assert!(second >= FRAME_TARGET_TIME.as_secs_f32());
    }
}
