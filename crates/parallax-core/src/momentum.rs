//! Drag-to-scroll with inertial momentum
//!
//! Explicit state machine: `Idle -> Dragging -> Coasting -> Idle`.
//!
//! While dragging, the surface follows the pointer 1:1 and the last move
//! delta is kept as the release velocity. After release the offset keeps
//! moving by that velocity each frame while it decays geometrically. Every
//! coast owns a child cancellation token; a new press or a detach cancels
//! it, so stale frames never touch the surface.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::constants;
use crate::frame::{FrameLoop, FrameOutcome};

/// Momentum tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// Velocity multiplier per frame, in (0, 1)
    pub friction: f64,
    /// Coasting stops once |velocity| is at or below this (px/frame)
    pub stop_velocity: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction: constants::momentum::FRICTION,
            stop_velocity: constants::momentum::STOP_VELOCITY,
        }
    }
}

impl MomentumConfig {
    /// Number of coasting frames needed for `initial_velocity` to decay to
    /// the stop velocity: `ceil(log(stop/|v0|) / log(friction))`.
    pub fn frames_to_settle(&self, initial_velocity: f64) -> u64 {
        let speed = initial_velocity.abs();
        if speed <= self.stop_velocity {
            return 0;
        }
        let frames = (self.stop_velocity / speed).ln() / self.friction.ln();
        frames.ceil().max(0.0) as u64
    }
}

/// Where a drag came from. Touch drags must suppress the host's own
/// scrolling and page gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pointer,
    Touch,
}

/// Cursor affordance shown over the scroll surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

/// Host element the scroller drives
pub trait DragSurface {
    /// Current horizontal scroll offset
    fn scroll_offset(&self) -> f64;

    /// Set the horizontal scroll offset
    fn set_scroll_offset(&mut self, offset: f64);

    /// Largest valid offset, `None` when the host clamps on its own
    fn max_scroll_offset(&self) -> Option<f64> {
        None
    }

    fn set_cursor(&mut self, _cursor: Cursor) {}

    /// Enable or suppress text selection on the surface
    fn set_text_selection(&mut self, _enabled: bool) {}
}

/// Result of feeding a move event to the scroller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResponse {
    /// The move belonged to an active drag
    pub handled: bool,
    /// The host should cancel its default handling (touch scrolling)
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    input: InputKind,
    start_x: f64,
    scroll_at_start: f64,
    last_x: f64,
    velocity: f64,
}

#[derive(Debug, Clone)]
struct Coast {
    velocity: f64,
    token: CancellationToken,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Coasting(Coast),
}

/// Drag-momentum scroller bound to one surface
#[derive(Debug)]
pub struct MomentumScroller {
    config: MomentumConfig,
    phase: Phase,
    /// Parent of every coast token; cancelled on detach
    lifetime: CancellationToken,
    attached: bool,
}

impl Default for MomentumScroller {
    fn default() -> Self {
        Self::new(MomentumConfig::default())
    }
}

fn clamp_offset<S: DragSurface + ?Sized>(surface: &S, offset: f64) -> f64 {
    match surface.max_scroll_offset() {
        Some(max) => offset.clamp(0.0, max.max(0.0)),
        None => offset,
    }
}

impl MomentumScroller {
    pub fn new(config: MomentumConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            lifetime: CancellationToken::new(),
            attached: false,
        }
    }

    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Bind to a surface. A missing surface is a no-op and leaves the
    /// scroller detached.
    pub fn attach<S: DragSurface + ?Sized>(&mut self, surface: Option<&mut S>) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        if self.lifetime.is_cancelled() {
            self.lifetime = CancellationToken::new();
        }
        surface.set_cursor(Cursor::Grab);
        self.attached = true;
        true
    }

    /// Unbind, cancelling any coast in flight and restoring the surface
    pub fn detach<S: DragSurface + ?Sized>(&mut self, surface: Option<&mut S>) {
        self.lifetime.cancel();
        if matches!(self.phase, Phase::Dragging(_)) {
            if let Some(surface) = surface {
                surface.set_text_selection(true);
                surface.set_cursor(Cursor::Grab);
            }
        }
        self.phase = Phase::Idle;
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // =========================================================================
    // Pointer / touch events
    // =========================================================================

    /// Pointer-down / touch-start on the surface
    pub fn press<S: DragSurface + ?Sized>(&mut self, surface: &mut S, x: f64, input: InputKind) {
        if !self.attached {
            return;
        }
        if self.stop_coast() {
            debug!("Coast interrupted by new drag");
        }

        let scroll_at_start = surface.scroll_offset();
        self.phase = Phase::Dragging(DragSession {
            input,
            start_x: x,
            scroll_at_start,
            last_x: x,
            velocity: 0.0,
        });
        surface.set_cursor(Cursor::Grabbing);
        surface.set_text_selection(false);
        trace!(x, scroll_at_start, ?input, "Drag started");
    }

    /// Pointer/touch move anywhere in the document
    pub fn drag_to<S: DragSurface + ?Sized>(&mut self, surface: &mut S, x: f64) -> MoveResponse {
        let Phase::Dragging(session) = &mut self.phase else {
            return MoveResponse::default();
        };

        let delta = x - session.start_x;
        session.velocity = x - session.last_x;
        session.last_x = x;

        let offset = clamp_offset(surface, session.scroll_at_start - delta);
        surface.set_scroll_offset(offset);

        MoveResponse {
            handled: true,
            prevent_default: session.input == InputKind::Touch,
        }
    }

    /// Pointer-up / touch-end anywhere in the document.
    ///
    /// Returns true when a coast started.
    pub fn release<S: DragSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Phase::Dragging(session) = &self.phase else {
            return false;
        };
        let velocity = session.velocity;

        surface.set_cursor(Cursor::Grab);
        surface.set_text_selection(true);

        if velocity.abs() > self.config.stop_velocity {
            debug!(
                velocity,
                frames = self.config.frames_to_settle(velocity),
                "Drag released, coasting"
            );
            self.phase = Phase::Coasting(Coast {
                velocity,
                token: self.lifetime.child_token(),
            });
            true
        } else {
            trace!(velocity, "Drag released without momentum");
            self.phase = Phase::Idle;
            false
        }
    }

    // =========================================================================
    // Momentum
    // =========================================================================

    /// Advance one animation frame. Returns true while the coast continues.
    pub fn step<S: DragSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Phase::Coasting(coast) = &mut self.phase else {
            return false;
        };
        if coast.token.is_cancelled() || coast.velocity.abs() <= self.config.stop_velocity {
            self.phase = Phase::Idle;
            return false;
        }

        let offset = clamp_offset(surface, surface.scroll_offset() - coast.velocity);
        surface.set_scroll_offset(offset);
        coast.velocity *= self.config.friction;

        if coast.velocity.abs() <= self.config.stop_velocity {
            trace!(offset, "Coast settled");
            self.phase = Phase::Idle;
            return false;
        }
        true
    }

    /// Cancel the coast in flight, if any. Returns true when one was stopped.
    pub fn stop_coast(&mut self) -> bool {
        let Phase::Coasting(coast) = &self.phase else {
            return false;
        };
        coast.token.cancel();
        trace!(velocity = coast.velocity, "Coast stopped");
        self.phase = Phase::Idle;
        true
    }

    /// Run the current coast on a frame loop until it settles or is cancelled
    pub async fn coast<S: DragSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        frames: &FrameLoop,
    ) -> FrameOutcome {
        let Some(token) = self.coast_token() else {
            return FrameOutcome::Finished { frames: 0 };
        };
        frames
            .run(&token, |_| {
                if self.step(surface) {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            })
            .await
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Token of the coast in flight, if any
    pub fn coast_token(&self) -> Option<CancellationToken> {
        match &self.phase {
            Phase::Coasting(coast) => Some(coast.token.clone()),
            _ => None,
        }
    }

    /// Current velocity: the last move delta while dragging, the decaying
    /// coast velocity afterwards
    pub fn velocity(&self) -> f64 {
        match &self.phase {
            Phase::Idle => 0.0,
            Phase::Dragging(session) => session.velocity,
            Phase::Coasting(coast) => coast.velocity,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_coasting(&self) -> bool {
        matches!(self.phase, Phase::Coasting(_))
    }

    /// Move/up events should be captured document-wide only while dragging
    pub fn captures_document_events(&self) -> bool {
        self.is_dragging()
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Strip {
        offset: f64,
        max: Option<f64>,
        cursor: Option<Cursor>,
        selectable: bool,
        writes: usize,
    }

    impl DragSurface for Strip {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.offset = offset;
            self.writes += 1;
        }

        fn max_scroll_offset(&self) -> Option<f64> {
            self.max
        }

        fn set_cursor(&mut self, cursor: Cursor) {
            self.cursor = Some(cursor);
        }

        fn set_text_selection(&mut self, enabled: bool) {
            self.selectable = enabled;
        }
    }

    fn attached() -> (MomentumScroller, Strip) {
        let mut strip = Strip {
            offset: 500.0,
            selectable: true,
            ..Default::default()
        };
        let mut scroller = MomentumScroller::default();
        assert!(scroller.attach(Some(&mut strip)));
        (scroller, strip)
    }

    #[test]
    fn test_attach_without_surface_is_noop() {
        let mut scroller = MomentumScroller::default();
        assert!(!scroller.attach::<Strip>(None));
        assert!(!scroller.is_attached());

        let mut strip = Strip::default();
        scroller.press(&mut strip, 10.0, InputKind::Pointer);
        assert!(scroller.is_idle());
        assert_eq!(strip.writes, 0);
    }

    #[test]
    fn test_drag_follows_pointer() {
        let (mut scroller, mut strip) = attached();
        assert_eq!(strip.cursor, Some(Cursor::Grab));

        scroller.press(&mut strip, 100.0, InputKind::Pointer);
        assert!(scroller.is_dragging());
        assert_eq!(strip.cursor, Some(Cursor::Grabbing));
        assert!(!strip.selectable);
        assert!(scroller.captures_document_events());

        let response = scroller.drag_to(&mut strip, 130.0);
        assert!(response.handled);
        assert!(!response.prevent_default);
        assert_eq!(strip.offset, 470.0);

        scroller.drag_to(&mut strip, 80.0);
        assert_eq!(strip.offset, 520.0);
    }

    #[test]
    fn test_touch_drag_prevents_default() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 0.0, InputKind::Touch);
        assert!(scroller.drag_to(&mut strip, 5.0).prevent_default);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut scroller, mut strip) = attached();
        let response = scroller.drag_to(&mut strip, 50.0);
        assert!(!response.handled);
        assert_eq!(strip.writes, 0);
    }

    #[test]
    fn test_release_velocity_is_last_delta() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 100.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 110.0);
        scroller.drag_to(&mut strip, 130.0);
        assert_eq!(scroller.velocity(), 20.0);

        assert!(scroller.release(&mut strip));
        assert!(scroller.is_coasting());
        assert_eq!(scroller.velocity(), 20.0);
        assert_eq!(strip.cursor, Some(Cursor::Grab));
        assert!(strip.selectable);
    }

    #[test]
    fn test_slow_release_does_not_coast() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 100.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 100.4);
        assert!(!scroller.release(&mut strip));
        assert!(scroller.is_idle());
        assert!(!scroller.step(&mut strip));
    }

    #[test]
    fn test_coast_applies_and_decays() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 10.0);
        scroller.release(&mut strip);
        let before = strip.offset;

        assert!(scroller.step(&mut strip));
        assert_eq!(strip.offset, before - 10.0);
        assert!((scroller.velocity() - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_frame_count_matches_closed_form() {
        for v0 in [1.0, 7.5, 20.0, -42.0, 120.0] {
            let (mut scroller, mut strip) = attached();
            strip.offset = 0.0;
            scroller.press(&mut strip, 0.0, InputKind::Pointer);
            scroller.drag_to(&mut strip, v0);
            scroller.release(&mut strip);

            let mut frames = 0u64;
            while scroller.is_coasting() {
                let before = strip.offset;
                scroller.step(&mut strip);
                if strip.offset != before {
                    frames += 1;
                }
            }

            let expected = ((0.5 / v0.abs()).ln() / 0.95f64.ln()).ceil() as u64;
            assert_eq!(frames, expected, "v0 = {v0}");
            assert_eq!(frames, scroller.config().frames_to_settle(v0));
        }
    }

    #[test]
    fn test_frames_to_settle_below_threshold() {
        let config = MomentumConfig::default();
        assert_eq!(config.frames_to_settle(0.5), 0);
        assert_eq!(config.frames_to_settle(-0.2), 0);
        assert_eq!(config.frames_to_settle(0.0), 0);
    }

    #[test]
    fn test_new_drag_cancels_coast() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 30.0);
        scroller.release(&mut strip);
        scroller.step(&mut strip);

        let token = scroller.coast_token().unwrap();
        scroller.press(&mut strip, 200.0, InputKind::Pointer);
        assert!(token.is_cancelled());

        let frozen = strip.offset;
        for _ in 0..10 {
            assert!(!scroller.step(&mut strip));
        }
        assert_eq!(strip.offset, frozen);
        assert!(scroller.is_dragging());
    }

    #[test]
    fn test_stop_coast_goes_idle() {
        let (mut scroller, mut strip) = attached();
        assert!(!scroller.stop_coast());

        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 30.0);
        scroller.release(&mut strip);
        let token = scroller.coast_token().unwrap();

        assert!(scroller.stop_coast());
        assert!(token.is_cancelled());
        assert!(scroller.is_idle());
        let frozen = strip.offset;
        assert!(!scroller.step(&mut strip));
        assert_eq!(strip.offset, frozen);
    }

    #[test]
    fn test_detach_cancels_coast() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 30.0);
        scroller.release(&mut strip);
        let token = scroller.coast_token().unwrap();

        scroller.detach(Some(&mut strip));
        assert!(token.is_cancelled());
        assert!(scroller.is_idle());
        assert!(!scroller.is_attached());

        // Re-attaching yields fresh, uncancelled coasts
        scroller.attach(Some(&mut strip));
        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 30.0);
        scroller.release(&mut strip);
        assert!(!scroller.coast_token().unwrap().is_cancelled());
    }

    #[test]
    fn test_offsets_clamped_to_surface_range() {
        let (mut scroller, mut strip) = attached();
        strip.offset = 10.0;
        strip.max = Some(100.0);

        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, 50.0);
        assert_eq!(strip.offset, 0.0);

        scroller.drag_to(&mut strip, -500.0);
        assert_eq!(strip.offset, 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_coast_on_frame_loop_settles() {
        let (mut scroller, mut strip) = attached();
        scroller.press(&mut strip, 0.0, InputKind::Pointer);
        scroller.drag_to(&mut strip, -20.0);
        scroller.release(&mut strip);

        let outcome = scroller.coast(&mut strip, &FrameLoop::default()).await;
        assert_eq!(
            outcome,
            FrameOutcome::Finished {
                frames: MomentumConfig::default().frames_to_settle(20.0)
            }
        );
        assert!(scroller.is_idle());
        assert!(strip.offset > 500.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_coast_without_momentum_runs_no_frames() {
        let (mut scroller, mut strip) = attached();
        let outcome = scroller.coast(&mut strip, &FrameLoop::default()).await;
        assert_eq!(outcome.frames(), 0);
    }
}
