//! Parallax Core - Scroll-driven animation primitives
//!
//! This crate provides the toolkit-agnostic pieces of the Parallax playground:
//! - Visibility-triggered reveal animations (fade-in, per-character text)
//! - Sticky heading scale/offset/opacity mapped from scroll progress
//! - Drag-to-scroll with inertial momentum
//! - Count-up counters, marquee tickers and a cancellable frame loop

pub mod config;
pub mod constants;
pub mod counter;
pub mod easing;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod marquee;
pub mod momentum;
pub mod paths;
pub mod reveal;
pub mod sticky;

// Re-exports for convenience
pub use config::ParallaxConfig;
pub use counter::AnimatedCounter;
pub use error::{ConfigError, ConfigResult};
pub use frame::{FrameLoop, FrameOutcome, FrameTick};
pub use geometry::Rect;
pub use marquee::Marquee;
pub use momentum::{Cursor, DragSurface, InputKind, MomentumScroller};
pub use reveal::{CharReveal, FadeIn, InView, InViewOptions, IntersectionObserver};
pub use sticky::{HeadingStyle, ScrollGeometry, StickyHeading, StickyScaleMapper};
