//! Boolean "is in view" signal backed by an intersection observer

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::observer::{IntersectionEntry, IntersectionObserver};
use crate::constants;
use crate::geometry::Rect;

/// Observer options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InViewOptions {
    /// Visible ratio needed to count as in view
    pub threshold: f64,
    /// Stay in view after the first reveal and stop observing
    pub trigger_once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: constants::reveal::DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

impl InViewOptions {
    /// Counters start once half of the element is visible
    pub fn counter() -> Self {
        Self {
            threshold: constants::reveal::COUNTER_THRESHOLD,
            trigger_once: true,
        }
    }

    /// Replays every time the element re-enters the viewport
    pub fn reversible(threshold: f64) -> Self {
        Self {
            threshold,
            trigger_once: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Not watching (never mounted, element missing at mount, or unmounted)
    Unmounted,
    Observing,
    /// One-shot reveal happened; the observer is detached for good
    Finished,
}

/// Visibility-triggered animation signal for one element
#[derive(Debug, Clone)]
pub struct InView {
    options: InViewOptions,
    observer: IntersectionObserver,
    lifecycle: Lifecycle,
    in_view: bool,
}

impl InView {
    pub fn new(options: InViewOptions) -> Self {
        Self {
            observer: IntersectionObserver::new(options.threshold),
            options,
            lifecycle: Lifecycle::Unmounted,
            in_view: false,
        }
    }

    pub fn options(&self) -> &InViewOptions {
        &self.options
    }

    /// Register the watcher for `element`.
    ///
    /// When the element is not attached yet nothing is registered and later
    /// updates are ignored until `mount` runs again with an element.
    pub fn mount(&mut self, element: Option<&Rect>) -> bool {
        if self.lifecycle != Lifecycle::Unmounted {
            return self.lifecycle == Lifecycle::Observing;
        }
        if element.is_none() {
            debug!("Reveal target not attached at mount, not observing");
            return false;
        }
        self.observer.observe();
        self.lifecycle = Lifecycle::Observing;
        true
    }

    /// Unregister the watcher
    pub fn unmount(&mut self) {
        self.observer.unobserve();
        if self.lifecycle == Lifecycle::Observing {
            self.lifecycle = Lifecycle::Unmounted;
        }
    }

    /// Sample the element against the viewport.
    ///
    /// Returns `Some(new_state)` when `is_in_view` changed. An unattached
    /// element skips the update.
    pub fn update(&mut self, element: Option<&Rect>, viewport: &Rect) -> Option<bool> {
        let element = element?;
        let entry = self.observer.sample(element, viewport)?;
        self.handle_entry(entry)
    }

    /// Apply one observer entry
    pub fn handle_entry(&mut self, entry: IntersectionEntry) -> Option<bool> {
        if self.lifecycle != Lifecycle::Observing {
            return None;
        }
        let before = self.in_view;

        if entry.is_intersecting {
            self.in_view = true;
            if self.options.trigger_once {
                self.observer.unobserve();
                self.lifecycle = Lifecycle::Finished;
                trace!(ratio = entry.ratio, "Revealed once, observer detached");
            }
        } else if !self.options.trigger_once {
            self.in_view = false;
        }

        (self.in_view != before).then_some(self.in_view)
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_observing(&self) -> bool {
        self.lifecycle == Lifecycle::Observing && self.observer.is_observing()
    }

    /// Observer callbacks delivered so far
    pub fn deliveries(&self) -> u64 {
        self.observer.delivered()
    }
}
