//! Visibility-triggered reveal animations
//!
//! [`InView`] turns intersection samples into a boolean signal; [`FadeIn`]
//! and [`CharReveal`] map that signal to interpolated visual states.

mod chars;
mod fade;
mod in_view;
mod observer;

pub use chars::{CharReveal, GlyphStyle};
pub use fade::{FadeDirection, FadeIn, RevealStyle};
pub use in_view::{InView, InViewOptions};
pub use observer::{IntersectionEntry, IntersectionObserver};

use std::time::Duration;

use crate::easing::CubicBezier;

/// Progress of a transition started `elapsed` ago, after `delay`, lasting `duration`
pub(crate) fn transition_progress(
    elapsed: Duration,
    delay: Duration,
    duration: Duration,
    curve: &CubicBezier,
) -> f64 {
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    let linear = (active.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0);
    curve.ease(linear)
}
