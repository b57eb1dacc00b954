//! Single-target intersection observer
//!
//! Mirrors the browser primitive closely enough for the reveal hooks: an
//! entry is delivered on the first sample after `observe` and then only when
//! the thresholded state flips. Deliveries are counted so callers can verify
//! that an unobserved target stays silent.

use crate::geometry::Rect;

/// One intersection callback payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Visible fraction of the target, in [0, 1]
    pub ratio: f64,
    /// Ratio is at or above the threshold (any overlap for threshold 0)
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    threshold: f64,
    observing: bool,
    last_state: Option<bool>,
    delivered: u64,
}

impl IntersectionObserver {
    /// Threshold is clamped into [0, 1]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            observing: false,
            last_state: None,
            delivered: 0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching; the next sample always delivers an entry
    pub fn observe(&mut self) {
        self.observing = true;
        self.last_state = None;
    }

    pub fn unobserve(&mut self) {
        self.observing = false;
        self.last_state = None;
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Total entries delivered since creation
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    fn crosses(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }

    /// Feed the target's current geometry. Returns an entry when the
    /// observer would fire its callback.
    pub fn sample(&mut self, target: &Rect, viewport: &Rect) -> Option<IntersectionEntry> {
        self.sample_ratio(target.visible_ratio(viewport))
    }

    /// Same as [`sample`](Self::sample) with a precomputed ratio
    pub fn sample_ratio(&mut self, ratio: f64) -> Option<IntersectionEntry> {
        if !self.observing {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        let is_intersecting = self.crosses(ratio);
        if self.last_state == Some(is_intersecting) {
            return None;
        }
        self.last_state = Some(is_intersecting);
        self.delivered += 1;
        Some(IntersectionEntry {
            ratio,
            is_intersecting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_observing_delivers_nothing() {
        let mut observer = IntersectionObserver::new(0.1);
        assert_eq!(observer.sample_ratio(1.0), None);
        assert_eq!(observer.delivered(), 0);
    }

    #[test]
    fn test_first_sample_always_delivers() {
        let mut observer = IntersectionObserver::new(0.1);
        observer.observe();
        let entry = observer.sample_ratio(0.0).unwrap();
        assert!(!entry.is_intersecting);
        assert_eq!(observer.delivered(), 1);
    }

    #[test]
    fn test_delivers_only_on_crossings() {
        let mut observer = IntersectionObserver::new(0.5);
        observer.observe();
        observer.sample_ratio(0.1);
        assert_eq!(observer.sample_ratio(0.3), None);
        assert!(observer.sample_ratio(0.5).unwrap().is_intersecting);
        assert_eq!(observer.sample_ratio(0.9), None);
        assert!(!observer.sample_ratio(0.49).unwrap().is_intersecting);
        assert_eq!(observer.delivered(), 3);
    }

    #[test]
    fn test_zero_threshold_means_any_overlap() {
        let mut observer = IntersectionObserver::new(0.0);
        observer.observe();
        assert!(!observer.sample_ratio(0.0).unwrap().is_intersecting);
        assert!(observer.sample_ratio(0.001).unwrap().is_intersecting);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(IntersectionObserver::new(3.0).threshold(), 1.0);
        assert_eq!(IntersectionObserver::new(-1.0).threshold(), 0.0);
        assert_eq!(IntersectionObserver::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn test_sample_uses_geometry() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut observer = IntersectionObserver::new(0.5);
        observer.observe();
        let entry = observer
            .sample(&Rect::new(0.0, 80.0, 100.0, 40.0), &viewport)
            .unwrap();
        assert!((entry.ratio - 0.5).abs() < 1e-9);
        assert!(entry.is_intersecting);
    }
}
