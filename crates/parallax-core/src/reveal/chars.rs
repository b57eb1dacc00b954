//! Per-character staggered text reveal

use std::time::Duration;

use super::transition_progress;
use crate::constants;
use crate::easing::CubicBezier;
use crate::geometry::lerp;

/// Spaces are rendered as non-breaking so glyph boxes keep their width
const NBSP: char = '\u{00A0}';

/// Style of one revealed character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub ch: char,
    pub opacity: f64,
    pub translate_y: f64,
}

/// Staggered reveal of a line of text, one glyph at a time
#[derive(Debug, Clone, PartialEq)]
pub struct CharReveal {
    text: String,
    pub stagger: Duration,
    pub distance: f64,
    pub duration: Duration,
    pub curve: CubicBezier,
}

impl CharReveal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stagger: constants::reveal::CHAR_STAGGER,
            distance: constants::reveal::CHAR_DISTANCE,
            duration: constants::reveal::CHAR_DURATION,
            curve: CubicBezier::glyph(),
        }
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Accessible label: the original text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Transition delay of glyph `index`. Glyphs only stagger on the way in.
    pub fn delay(&self, index: usize, in_view: bool) -> Duration {
        if in_view {
            self.stagger * index as u32
        } else {
            Duration::ZERO
        }
    }

    /// Time until every glyph settled after the signal flips to in view
    pub fn settle_time(&self) -> Duration {
        self.delay(self.len().saturating_sub(1), true) + self.duration
    }

    /// Glyph styles `since_change` after the signal last flipped
    /// (`None`: never flipped, glyphs sit at their target).
    pub fn glyphs(&self, in_view: bool, since_change: Option<Duration>) -> Vec<GlyphStyle> {
        let (hidden_opacity, hidden_y) = (0.0, self.distance);
        let (shown_opacity, shown_y) = (1.0, 0.0);

        self.text
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                let ch = if ch == ' ' { NBSP } else { ch };
                let t = match since_change {
                    Some(elapsed) => transition_progress(
                        elapsed,
                        self.delay(index, in_view),
                        self.duration,
                        &self.curve,
                    ),
                    None => 1.0,
                };
                let (from, to) = if in_view {
                    ((hidden_opacity, hidden_y), (shown_opacity, shown_y))
                } else {
                    ((shown_opacity, shown_y), (hidden_opacity, hidden_y))
                };
                GlyphStyle {
                    ch,
                    opacity: lerp(from.0, to.0, t),
                    translate_y: lerp(from.1, to.1, t),
                }
            })
            .collect()
    }
}
