//! Sticky heading driven by scroll progress
//!
//! A tall container scrolls past a fixed-height viewport. The heading inside
//! grows while the container enters, holds (dimmed) while the content
//! scrolls over it, then shrinks and fades out at the end:
//!
//! | progress       | font size     | offset         | opacity     |
//! |----------------|---------------|----------------|-------------|
//! | `[0, grow)`    | min -> max    | 0 -> center    | 1           |
//! | `[grow, shrink]` | max         | center         | hold        |
//! | `(shrink, 1]`  | max -> min    | center         | hold -> 0   |
//!
//! Outside the viewport the heading snaps back to its rest style.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::sticky::*;
use crate::geometry::lerp;

/// Container position relative to the viewport (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Container top relative to the viewport top
    pub top: f64,
    /// Container height
    pub height: f64,
    /// Viewport height
    pub viewport_height: f64,
}

impl ScrollGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Entirely below or entirely above the viewport
    pub fn is_outside_viewport(&self) -> bool {
        self.top > self.viewport_height || self.top + self.height < 0.0
    }
}

/// Which part of the scroll mapping produced a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingPhase {
    /// Container outside the viewport
    Rest,
    Growing,
    Holding,
    Shrinking,
}

/// Heading style in viewport units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    /// Font size (vw)
    pub font_size_vw: f64,
    /// Downward offset (vh)
    pub offset_vh: f64,
    pub opacity: f64,
}

/// Scroll progress to heading style mapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyScaleMapper {
    pub min_font_vw: f64,
    pub max_font_vw: f64,
    pub center_offset_vh: f64,
    /// End of the growing phase
    pub grow_end: f64,
    /// Start of the shrinking phase
    pub shrink_start: f64,
    /// Opacity while holding
    pub hold_opacity: f64,
}

impl Default for StickyScaleMapper {
    fn default() -> Self {
        Self {
            min_font_vw: MIN_FONT_VW,
            max_font_vw: MAX_FONT_VW,
            center_offset_vh: CENTER_OFFSET_VH,
            grow_end: GROW_END,
            shrink_start: SHRINK_START,
            hold_opacity: HOLD_OPACITY,
        }
    }
}

impl StickyScaleMapper {
    /// Style while the container is off screen
    pub fn rest(&self) -> HeadingStyle {
        HeadingStyle {
            font_size_vw: self.min_font_vw,
            offset_vh: 0.0,
            opacity: 1.0,
        }
    }

    /// How far the container has scrolled through the viewport, in [0, 1].
    ///
    /// Containers no taller than the viewport have no scroll range and
    /// report 0.
    pub fn progress(&self, geometry: &ScrollGeometry) -> f64 {
        let range = geometry.height - geometry.viewport_height;
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        let progress = -geometry.top / range;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0)
    }

    pub fn phase_for(&self, progress: f64) -> HeadingPhase {
        if progress < self.grow_end {
            HeadingPhase::Growing
        } else if progress <= self.shrink_start {
            HeadingPhase::Holding
        } else {
            HeadingPhase::Shrinking
        }
    }

    fn clamp_font(&self, font: f64) -> f64 {
        font.clamp(self.min_font_vw, self.max_font_vw)
    }

    /// Style for an in-viewport progress value
    pub fn style_for_progress(&self, progress: f64) -> HeadingStyle {
        let progress = progress.clamp(0.0, 1.0);
        match self.phase_for(progress) {
            HeadingPhase::Growing => {
                let t = if self.grow_end > 0.0 {
                    progress / self.grow_end
                } else {
                    1.0
                };
                HeadingStyle {
                    font_size_vw: self.clamp_font(lerp(self.min_font_vw, self.max_font_vw, t)),
                    offset_vh: lerp(0.0, self.center_offset_vh, t),
                    opacity: 1.0,
                }
            }
            HeadingPhase::Holding => HeadingStyle {
                font_size_vw: self.max_font_vw,
                offset_vh: self.center_offset_vh,
                opacity: self.hold_opacity,
            },
            HeadingPhase::Shrinking | HeadingPhase::Rest => {
                let span = 1.0 - self.shrink_start;
                let t = if span > 0.0 {
                    ((progress - self.shrink_start) / span).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                HeadingStyle {
                    font_size_vw: self.clamp_font(lerp(self.max_font_vw, self.min_font_vw, t)),
                    offset_vh: self.center_offset_vh,
                    opacity: lerp(self.hold_opacity, 0.0, t),
                }
            }
        }
    }

    /// Map container geometry to a phase and style
    pub fn map(&self, geometry: &ScrollGeometry) -> (HeadingPhase, HeadingStyle) {
        if geometry.is_outside_viewport() {
            return (HeadingPhase::Rest, self.rest());
        }
        let progress = self.progress(geometry);
        (self.phase_for(progress), self.style_for_progress(progress))
    }

    pub fn style(&self, geometry: &ScrollGeometry) -> HeadingStyle {
        self.map(geometry).1
    }
}

/// Sticky heading bound to one scroll container
#[derive(Debug, Clone)]
pub struct StickyHeading {
    mapper: StickyScaleMapper,
    style: HeadingStyle,
    phase: HeadingPhase,
    mounted: bool,
}

impl StickyHeading {
    pub fn new(mapper: StickyScaleMapper) -> Self {
        Self {
            style: mapper.rest(),
            phase: HeadingPhase::Rest,
            mapper,
            mounted: false,
        }
    }

    pub fn mapper(&self) -> &StickyScaleMapper {
        &self.mapper
    }

    /// Start listening and compute the initial style before any scroll
    pub fn mount(&mut self, geometry: Option<ScrollGeometry>) {
        self.mounted = true;
        self.on_scroll(geometry);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute on a scroll tick. Missing geometry (container not
    /// attached) leaves the style untouched. Returns true when the style changed.
    pub fn on_scroll(&mut self, geometry: Option<ScrollGeometry>) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(geometry) = geometry else {
            return false;
        };
        let (phase, style) = self.mapper.map(&geometry);
        if phase != self.phase {
            trace!(?phase, top = geometry.top, "Sticky heading phase changed");
        }
        let changed = style != self.style;
        self.phase = phase;
        self.style = style;
        changed
    }

    pub fn style(&self) -> HeadingStyle {
        self.style
    }

    pub fn phase(&self) -> HeadingPhase {
        self.phase
    }
}
