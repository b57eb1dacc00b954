//! CSS-style cubic-bezier timing functions
//!
//! Solves x(t) = progress for the curve parameter with a few Newton steps,
//! falling back to bisection when the slope is too flat.

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

/// A `cubic-bezier(x1, y1, x2, y2)` timing curve anchored at (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Control x values are clamped into [0, 1] so the curve stays a function
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    /// Ease used for section fade-ins (easeOutQuart-like)
    pub fn fade() -> Self {
        Self::new(0.165, 0.84, 0.44, 1.0)
    }

    /// Ease used for per-character text reveal (easeOutQuad-like)
    pub fn glyph() -> Self {
        Self::new(0.25, 0.46, 0.45, 0.94)
    }

    pub fn linear() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        // Bernstein form with P0 = 0, P3 = 1
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope_x(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * self.x1 + 6.0 * u * t * (self.x2 - self.x1) + 3.0 * t * t * (1.0 - self.x2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased value for linear progress in [0, 1]
    pub fn ease(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(progress);
        Self::sample(self.y1, self.y2, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for curve in [CubicBezier::fade(), CubicBezier::glyph(), CubicBezier::linear()] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
            assert_eq!(curve.ease(-0.5), 0.0);
            assert_eq!(curve.ease(2.0), 1.0);
        }
    }

    #[test]
    fn test_linear_is_identity() {
        let linear = CubicBezier::linear();
        for i in 1..10 {
            let p = i as f64 / 10.0;
            assert!((linear.ease(p) - p).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ease_out_curves_are_monotonic_and_ahead_of_linear() {
        for curve in [CubicBezier::fade(), CubicBezier::glyph()] {
            let mut last = 0.0;
            for i in 1..100 {
                let p = i as f64 / 100.0;
                let v = curve.ease(p);
                assert!(v >= last - 1e-9, "not monotonic at {p}");
                assert!(v >= p - 1e-6, "ease-out should lead linear at {p}");
                last = v;
            }
        }
    }
}
