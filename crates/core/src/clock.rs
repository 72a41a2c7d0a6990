//! Fixed timestep accumulator
//!
//! Wall-clock frame time goes in, a whole number of simulation ticks comes
//! out. The fractional remainder is carried to the next frame. Time is kept
//! as an integer [`Duration`] so the tick count over a run depends only on the
//! total elapsed time, never on how it was split across frames.

use std::time::Duration;

use crate::types::FIXED_TIMESTEP_NS;

/// Length of one simulation tick
pub const FIXED_TIMESTEP: Duration = Duration::from_nanos(FIXED_TIMESTEP_NS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::with_step(FIXED_TIMESTEP)
    }

    /// A clock ticking every `step` (at least one nanosecond).
    pub fn with_step(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time carried over that has not yet filled a whole tick.
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Add frame time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0u32;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks = ticks.saturating_add(1);
        }
        ticks
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frames_accumulate_until_a_tick_is_due() {
        let mut clock = FixedTimestep::new();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.accumulator(), Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(
            clock.accumulator(),
            Duration::from_millis(20) - FIXED_TIMESTEP
        );
    }

    #[test]
    fn long_frames_run_several_ticks() {
        let mut clock = FixedTimestep::new();
        assert_eq!(clock.advance(FIXED_TIMESTEP * 3), 3);
        assert_eq!(clock.accumulator(), Duration::ZERO);
    }

    #[test]
    fn exact_step_runs_one_tick() {
        let mut clock = FixedTimestep::with_step(Duration::from_millis(16));
        assert_eq!(clock.advance(Duration::from_millis(16)), 1);
        assert_eq!(clock.advance(Duration::from_millis(15)), 0);
        assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn zero_step_is_raised_to_one_nanosecond() {
        let mut clock = FixedTimestep::with_step(Duration::ZERO);
        assert_eq!(clock.step(), Duration::from_nanos(1));
        assert_eq!(clock.advance(Duration::from_nanos(3)), 3);
    }
}
