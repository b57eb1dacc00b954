//! Directional fade-in driven by an in-view signal

use std::time::Duration;

use super::transition_progress;
use crate::constants;
use crate::easing::CubicBezier;
use crate::geometry::lerp;

/// Direction the element travels while appearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// Interpolated opacity and translation (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl RevealStyle {
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Resting style before the reveal, offset against the travel direction
    pub fn hidden(direction: FadeDirection, distance: f64) -> Self {
        let (translate_x, translate_y) = match direction {
            FadeDirection::Up => (0.0, distance),
            FadeDirection::Down => (0.0, -distance),
            FadeDirection::Left => (distance, 0.0),
            FadeDirection::Right => (-distance, 0.0),
        };
        Self {
            opacity: 0.0,
            translate_x,
            translate_y,
        }
    }

    pub fn lerp(&self, to: &RevealStyle, t: f64) -> Self {
        Self {
            opacity: lerp(self.opacity, to.opacity, t),
            translate_x: lerp(self.translate_x, to.translate_x, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
        }
    }
}

/// Fade-in transition settings for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    pub direction: FadeDirection,
    pub delay: Duration,
    pub distance: f64,
    pub duration: Duration,
    pub curve: CubicBezier,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(FadeDirection::Up)
    }
}

impl FadeIn {
    pub fn new(direction: FadeDirection) -> Self {
        Self {
            direction,
            delay: Duration::ZERO,
            distance: constants::reveal::FADE_DISTANCE,
            duration: constants::reveal::FADE_DURATION,
            curve: CubicBezier::fade(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// End state for the current signal value
    pub fn target(&self, in_view: bool) -> RevealStyle {
        if in_view {
            RevealStyle::SHOWN
        } else {
            RevealStyle::hidden(self.direction, self.distance)
        }
    }

    /// Style `since_change` after the signal last flipped. `None` means the
    /// signal never changed, so the element sits at its target.
    pub fn style_at(&self, in_view: bool, since_change: Option<Duration>) -> RevealStyle {
        let Some(elapsed) = since_change else {
            return self.target(in_view);
        };
        let from = self.target(!in_view);
        let to = self.target(in_view);
        let t = transition_progress(elapsed, self.delay, self.duration, &self.curve);
        from.lerp(&to, t)
    }

    /// Time until the transition settles
    pub fn settle_time(&self) -> Duration {
        self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_offsets_per_direction() {
        let cases = [
            (FadeDirection::Up, (0.0, 50.0)),
            (FadeDirection::Down, (0.0, -50.0)),
            (FadeDirection::Left, (50.0, 0.0)),
            (FadeDirection::Right, (-50.0, 0.0)),
        ];
        for (direction, (x, y)) in cases {
            let hidden = FadeIn::new(direction).target(false);
            assert_eq!(hidden.opacity, 0.0);
            assert_eq!((hidden.translate_x, hidden.translate_y), (x, y));
        }
        assert_eq!(FadeIn::default().target(true), RevealStyle::SHOWN);
    }

    #[test]
    fn test_transition_respects_delay() {
        let fade = FadeIn::new(FadeDirection::Up).with_delay(Duration::from_millis(500));

        let waiting = fade.style_at(true, Some(Duration::from_millis(400)));
        assert_eq!(waiting, fade.target(false));

        let midway = fade.style_at(true, Some(Duration::from_millis(1250)));
        assert!(midway.opacity > 0.5 && midway.opacity < 1.0);
        assert!(midway.translate_y > 0.0 && midway.translate_y < 50.0);

        let done = fade.style_at(true, Some(fade.settle_time()));
        assert_eq!(done, RevealStyle::SHOWN);
    }

    #[test]
    fn test_without_change_sits_at_target() {
        let fade = FadeIn::new(FadeDirection::Left);
        assert_eq!(fade.style_at(false, None), fade.target(false));
        assert_eq!(fade.style_at(true, None), RevealStyle::SHOWN);
    }

    #[test]
    fn test_reverse_transition_hides() {
        let fade = FadeIn::default();
        let done = fade.style_at(false, Some(Duration::from_secs(5)));
        assert_eq!(done, fade.target(false));
    }
}
