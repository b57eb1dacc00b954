//! Count-up animation for stat counters
//!
//! The counter stays at zero until started (normally when its element comes
//! into view), then climbs linearly and lands exactly on the target.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::constants;
use crate::frame::{FrameLoop, FrameOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedCounter {
    target: u64,
    duration: Duration,
    started: bool,
}

impl AnimatedCounter {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, constants::timing::COUNTER_DURATION)
    }

    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Begin counting. Returns false when already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        debug!(target = self.target, "Counter started");
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.started && elapsed >= self.duration
    }

    /// Displayed value `elapsed` after start
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if !self.started {
            return 0;
        }
        if elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        ((self.target as f64) * progress).floor() as u64
    }

    /// Start (if needed) and count on a frame loop, reporting every value
    pub async fn run<F>(
        &mut self,
        frames: &FrameLoop,
        token: &CancellationToken,
        mut on_value: F,
    ) -> FrameOutcome
    where
        F: FnMut(u64),
    {
        self.start();
        let counter = &*self;
        frames
            .run(token, |tick| {
                on_value(counter.value_at(tick.elapsed));
                if counter.is_done(tick.elapsed) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_until_started() {
        let counter = AnimatedCounter::new(25);
        assert_eq!(counter.value_at(Duration::from_secs(10)), 0);
        assert!(!counter.is_done(Duration::from_secs(10)));
    }

    #[test]
    fn test_linear_floor_progression() {
        let mut counter = AnimatedCounter::with_duration(98, Duration::from_millis(2000));
        assert!(counter.start());
        assert!(!counter.start());

        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(Duration::from_millis(500)), 24);
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 49);
        assert_eq!(counter.value_at(Duration::from_millis(1999)), 97);
        assert_eq!(counter.value_at(Duration::from_millis(2000)), 98);
        assert_eq!(counter.value_at(Duration::from_secs(60)), 98);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut counter = AnimatedCounter::with_duration(8, Duration::ZERO);
        counter.start();
        assert_eq!(counter.value_at(Duration::ZERO), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_reports_monotonic_values_and_lands_on_target() {
        let mut counter = AnimatedCounter::with_duration(15, Duration::from_millis(200));
        let token = CancellationToken::new();
        let mut values = Vec::new();

        let outcome = counter
            .run(&FrameLoop::new(Duration::from_millis(16)), &token, |v| {
                values.push(v)
            })
            .await;

        assert!(!outcome.was_cancelled());
        assert_eq!(values.last(), Some(&15));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_stops_on_cancel() {
        let mut counter = AnimatedCounter::new(25);
        let token = CancellationToken::new();
        token.cancel();

        let outcome = counter.run(&FrameLoop::default(), &token, |_| {}).await;
        assert!(outcome.was_cancelled());
        assert!(counter.is_started());
    }
}
