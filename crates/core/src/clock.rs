//! Fixed-step clock.
//!
//! The engine owns no timer. Hosts feed wall-clock time into a [`FixedStep`]
//! and call [`Engine::tick`](crate::Engine::tick) once per whole tick it
//! reports. Tests skip the clock and call `tick()` directly.

use std::time::Duration;

use crate::types::TICKS_PER_SECOND;

/// Converts elapsed time into a number of fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    period: Duration,
    accumulated: Duration,
    /// Ticks returned at most per `advance`; time beyond that is dropped.
    max_catch_up: u32,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32, max_catch_up: u32) -> Self {
        debug_assert!(ticks_per_second > 0);
        Self {
            period: Duration::from_secs(1) / ticks_per_second,
            accumulated: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `elapsed` and return how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.period && due < self.max_catch_up {
            self.accumulated -= self.period;
            due += 1;
        }

        // After a long stall (suspended terminal, debugger) don't replay the backlog.
        if self.accumulated >= self.period {
            self.accumulated = Duration::ZERO;
        }

        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_is_20ms() {
        assert_eq!(FixedStep::default().period(), Duration::from_millis(20));
    }

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(Duration::from_millis(15)), 0);
        assert_eq!(clock.until_next(), Duration::from_millis(5));
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
        assert_eq!(clock.until_next(), Duration::from_millis(15));
    }

    #[test]
    fn test_multiple_ticks_in_one_advance() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(Duration::from_millis(61)), 3);
        assert_eq!(clock.until_next(), Duration::from_millis(19));
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut clock = FixedStep::new(50, 5);
        assert_eq!(clock.advance(Duration::from_secs(10)), 5);
        // Backlog discarded.
        assert_eq!(clock.advance(Duration::ZERO), 0);
        assert_eq!(clock.until_next(), Duration::from_millis(20));
    }

    #[test]
    fn test_reset_drops_partial_tick() {
        let mut clock = FixedStep::default();
        clock.advance(Duration::from_millis(19));
        clock.reset();
        assert_eq!(clock.advance(Duration::from_millis(1)), 0);
    }
}
