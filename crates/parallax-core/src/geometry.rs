//! Geometry helpers shared by the reveal and sticky animations

/// Axis-aligned rectangle in page or viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Shift vertically (e.g. page coordinates to viewport coordinates)
    pub fn translate_y(&self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }

    /// Overlapping region, `None` when the rectangles do not touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Fraction of `self` visible inside `viewport`, in [0, 1].
    ///
    /// Zero-area targets count as fully visible when they sit inside the
    /// viewport, matching how browsers report empty elements.
    pub fn visible_ratio(&self, viewport: &Rect) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            let inside = self.top() >= viewport.top()
                && self.bottom() <= viewport.bottom()
                && self.left() >= viewport.left()
                && self.right() <= viewport.right();
            return if inside { 1.0 } else { 0.0 };
        }
        match self.intersection(viewport) {
            Some(overlap) => (overlap.area() / area).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

/// Linear interpolation between `from` and `to`
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_and_ratio() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let half_out = Rect::new(0.0, 50.0, 100.0, 100.0);

        assert_eq!(
            half_out.intersection(&viewport),
            Some(Rect::new(0.0, 50.0, 100.0, 50.0))
        );
        assert!((half_out.visible_ratio(&viewport) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_rects() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 20.0);
        assert_eq!(below.intersection(&viewport), None);
        assert_eq!(below.visible_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_zero_area_target() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Rect::new(10.0, 10.0, 0.0, 0.0).visible_ratio(&viewport), 1.0);
        assert_eq!(Rect::new(10.0, 200.0, 0.0, 0.0).visible_ratio(&viewport), 0.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(5.0, 20.0, 0.0), 5.0);
        assert_eq!(lerp(5.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }
}
