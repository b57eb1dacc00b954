//! Cancellable frame loop
//!
//! An explicit loop over a fixed-period tokio interval. The cancellation
//! token is checked on every iteration and raced against the next tick, so
//! a cancelled animation never runs another frame.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Information handed to each frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    /// Zero-based frame number
    pub index: u64,
    /// Time since the loop started
    pub elapsed: Duration,
}

/// How a frame loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The callback asked to stop
    Finished { frames: u64 },
    /// The token was cancelled first
    Cancelled { frames: u64 },
}

impl FrameOutcome {
    pub fn frames(&self) -> u64 {
        match self {
            FrameOutcome::Finished { frames } | FrameOutcome::Cancelled { frames } => *frames,
        }
    }

    pub fn was_cancelled(&self) -> bool {
        matches!(self, FrameOutcome::Cancelled { .. })
    }
}

/// Fixed-rate frame driver
#[derive(Debug, Clone, Copy)]
pub struct FrameLoop {
    period: Duration,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(crate::constants::timing::FRAME_PERIOD)
    }
}

impl FrameLoop {
    /// Periods below one millisecond are raised to one millisecond
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run `on_frame` once per period until it breaks or `token` is cancelled.
    ///
    /// The first frame fires one period after the call, like a scheduled
    /// animation frame.
    pub async fn run<F>(&self, token: &CancellationToken, mut on_frame: F) -> FrameOutcome
    where
        F: FnMut(FrameTick) -> ControlFlow<()>,
    {
        let start = Instant::now();
        let mut interval = tokio::time::interval_at(start + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0u64;
        loop {
            if token.is_cancelled() {
                trace!(frames, "Frame loop cancelled");
                return FrameOutcome::Cancelled { frames };
            }

            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    trace!(frames, "Frame loop cancelled while waiting");
                    return FrameOutcome::Cancelled { frames };
                }
                _ = interval.tick() => {}
            }

            let tick = FrameTick {
                index: frames,
                elapsed: start.elapsed(),
            };
            frames += 1;

            if on_frame(tick).is_break() {
                trace!(frames, "Frame loop finished");
                return FrameOutcome::Finished { frames };
            }
        }
    }
}
