//! Headless subcommands: inspect the core utilities without the TUI

use std::ops::ControlFlow;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use parallax_core::momentum::InputKind;
use parallax_core::sticky::HeadingPhase;
use parallax_core::{
    AnimatedCounter, DragSurface, FrameLoop, FrameOutcome, MomentumScroller, ParallaxConfig,
    ScrollGeometry,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Sticky heading mapping for one scroll position
#[derive(Debug, Clone, PartialEq)]
pub struct StickyReport {
    pub phase: HeadingPhase,
    pub progress: f64,
    pub font_size_vw: f64,
    pub offset_vh: f64,
    pub opacity: f64,
}

impl std::fmt::Display for StickyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "phase:     {:?}", self.phase)?;
        writeln!(f, "progress:  {:.4}", self.progress)?;
        writeln!(f, "font size: {:.2}vw", self.font_size_vw)?;
        writeln!(f, "offset:    {:.2}vh", self.offset_vh)?;
        write!(f, "opacity:   {:.3}", self.opacity)
    }
}

pub fn sticky(config: &ParallaxConfig, top: f64, height: f64, viewport: f64) -> StickyReport {
    let mapper = &config.sticky;
    let geometry = ScrollGeometry::new(top, height, viewport);
    let (phase, style) = mapper.map(&geometry);
    let progress = if phase == HeadingPhase::Rest {
        0.0
    } else {
        mapper.progress(&geometry)
    };
    StickyReport {
        phase,
        progress,
        font_size_vw: style.font_size_vw,
        offset_vh: style.offset_vh,
        opacity: style.opacity,
    }
}

/// Unbounded offset used to simulate a coast
#[derive(Debug, Default)]
struct TrackSurface {
    offset: f64,
}

impl DragSurface for TrackSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastFrame {
    pub index: u64,
    pub offset: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoastReport {
    pub frames: Vec<CoastFrame>,
    pub outcome: FrameOutcome,
    /// Closed-form frame count for the same release velocity
    pub predicted: u64,
}

/// Release a drag at `velocity` px/frame and coast on a real frame loop
pub async fn coast(
    config: &ParallaxConfig,
    velocity: f64,
    frames: &FrameLoop,
    token: &CancellationToken,
) -> CoastReport {
    let mut surface = TrackSurface::default();
    let mut scroller = MomentumScroller::new(config.momentum);
    scroller.attach(Some(&mut surface));

    // A single move of `velocity` px leaves exactly that release velocity
    scroller.press(&mut surface, 0.0, InputKind::Pointer);
    scroller.drag_to(&mut surface, velocity);
    scroller.release(&mut surface);

    let predicted = config.momentum.frames_to_settle(velocity);
    let mut log = Vec::new();

    let outcome = match scroller.coast_token() {
        Some(coast_token) => {
            // Stop on either the coast's own token or the caller's
            let guard = token.clone();
            let child = coast_token.clone();
            let link = tokio::spawn(async move {
                guard.cancelled().await;
                child.cancel();
            });
            let outcome = frames
                .run(&coast_token, |tick| {
                    let more = scroller.step(&mut surface);
                    log.push(CoastFrame {
                        index: tick.index,
                        offset: surface.offset,
                        velocity: scroller.velocity(),
                    });
                    if more {
                        ControlFlow::Continue(())
                    } else {
                        ControlFlow::Break(())
                    }
                })
                .await;
            link.abort();
            outcome
        }
        None => FrameOutcome::Finished { frames: 0 },
    };

    info!(velocity, predicted, frames = outcome.frames(), "Coast finished");
    CoastReport {
        frames: log,
        outcome,
        predicted,
    }
}

/// Count to `target` over `duration`, returning every displayed value
pub async fn count(
    target: u64,
    duration: Duration,
    frames: &FrameLoop,
    token: &CancellationToken,
) -> (Vec<u64>, FrameOutcome) {
    let mut counter = AnimatedCounter::with_duration(target, duration);
    let mut values = Vec::new();
    let outcome = counter
        .run(frames, token, |value| {
            if values.last() != Some(&value) {
                values.push(value);
            }
        })
        .await;
    (values, outcome)
}

/// Effective config as TOML, writing defaults first when `init` and missing
pub fn show_config(path: &Path, init: bool) -> Result<(ParallaxConfig, bool)> {
    let mut written = false;
    if init && !path.exists() {
        ParallaxConfig::default()
            .save_to(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written = true;
    }
    let config = if path.exists() {
        ParallaxConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?
    } else {
        ParallaxConfig::default()
    };
    Ok((config, written))
}
