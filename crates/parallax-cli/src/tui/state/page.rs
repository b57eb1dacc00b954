//! Page model - sections, their reveal signals and scroll-driven state
//!
//! Geometry is in terminal cells: one row or column per pixel of the
//! core utilities. Section tops are page coordinates; subtracting the
//! scroll offset gives viewport coordinates.

use std::time::{Duration, Instant};

use parallax_core::reveal::FadeDirection;
use parallax_core::{
    AnimatedCounter, CharReveal, FadeIn, InView, InViewOptions, Marquee, ParallaxConfig, Rect,
    ScrollGeometry, StickyHeading,
};
use tracing::debug;

use super::strip::{Card, CardStrip};

/// Work container spans this many viewports
const WORK_VIEWPORTS: usize = 3;
const MARQUEE_ROWS: usize = 3;
const SERVICE_ROWS: usize = 3;
const STATS_ROWS: usize = 7;
const STRIP_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Marquee,
    Work,
    Services,
    Stats,
    Strip,
    Contact,
}

/// One visibility signal plus the moment it last flipped
#[derive(Debug, Clone)]
pub struct RevealSlot {
    view: InView,
    changed_at: Option<Instant>,
}

impl RevealSlot {
    pub fn new(options: InViewOptions) -> Self {
        Self {
            view: InView::new(options),
            changed_at: None,
        }
    }

    pub fn mount(&mut self, element: Option<&Rect>) -> bool {
        self.view.mount(element)
    }

    /// Feed a frame sample. Returns true when the signal flipped.
    pub fn update(&mut self, element: Option<&Rect>, viewport: &Rect, now: Instant) -> bool {
        match self.view.update(element, viewport) {
            Some(_) => {
                self.changed_at = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn is_in_view(&self) -> bool {
        self.view.is_in_view()
    }

    /// Time since the last flip, `None` if it never flipped
    pub fn since_change(&self, now: Instant) -> Option<Duration> {
        self.changed_at.map(|at| now.saturating_duration_since(at))
    }

    /// Start over with a fresh, unmounted watcher
    pub fn reset(&mut self) {
        self.view.unmount();
        self.view = InView::new(*self.view.options());
        self.changed_at = None;
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub kind: SectionKind,
    /// Page row of the first line
    pub top: usize,
    pub height: usize,
    pub reveal: RevealSlot,
}

impl Section {
    fn new(kind: SectionKind, options: InViewOptions) -> Self {
        Self {
            kind,
            top: 0,
            height: 0,
            reveal: RevealSlot::new(options),
        }
    }

    /// Viewport-relative bounds at `scroll` rows down the page
    pub fn rect(&self, scroll: usize, width: u16) -> Rect {
        Rect::new(
            0.0,
            self.top as f64 - scroll as f64,
            width as f64,
            self.height as f64,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub counter: AnimatedCounter,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub title: &'static str,
    pub blurb: &'static str,
    pub fade: FadeIn,
}

/// The playground page
#[derive(Debug)]
pub struct Page {
    pub sections: Vec<Section>,
    pub hero_title: CharReveal,
    pub hero_subtitle: FadeIn,
    pub marquee: Marquee,
    pub heading_text: &'static str,
    pub heading: StickyHeading,
    pub services: Vec<Service>,
    pub stats: Vec<Stat>,
    stats_started: Option<Instant>,
    pub strip: CardStrip,
    pub contact_title: CharReveal,
    width: u16,
    height: u16,
    total_rows: usize,
}

impl Page {
    pub fn new(config: &ParallaxConfig) -> Self {
        let reveal = config.reveal.in_view_options();
        let counter_duration = config.timing.counter_duration();
        let item_stagger = config.reveal.item_stagger();

        let sections = vec![
            Section::new(SectionKind::Hero, reveal),
            Section::new(SectionKind::Marquee, reveal),
            Section::new(SectionKind::Work, reveal),
            Section::new(SectionKind::Services, reveal),
            Section::new(SectionKind::Stats, InViewOptions::counter()),
            Section::new(SectionKind::Strip, reveal),
            // Replays every time it comes back into view
            Section::new(
                SectionKind::Contact,
                InViewOptions::reversible(reveal.threshold),
            ),
        ];

        let services = [
            ("Brand Strategy", "Positioning, naming and voice"),
            ("Web Design", "Sites that move with the reader"),
            ("Motion", "Scroll-driven storytelling"),
            ("Development", "Fast, accessible front ends"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (title, blurb))| Service {
            title,
            blurb,
            fade: FadeIn::new(FadeDirection::Up).with_delay(item_stagger * i as u32),
        })
        .collect();

        let stats = [
            (25, "K", "Hours crafted"),
            (8, "K+", "Commits shipped"),
            (15, "", "Years in studio"),
            (98, "%", "Clients returning"),
        ]
        .into_iter()
        .map(|(target, suffix, label)| Stat {
            counter: AnimatedCounter::with_duration(target, counter_duration),
            suffix,
            label,
        })
        .collect();

        let cards = [
            ("Northwind", "Identity"),
            ("Halcyon Air", "Web"),
            ("Kiln & Co", "Packaging"),
            ("Orbital", "Motion"),
            ("Tessellate", "Product"),
            ("Mossgrove", "Campaign"),
            ("Lumen Labs", "Web"),
            ("Parcel", "Identity"),
        ]
        .into_iter()
        .map(|(title, tag)| Card::new(title, tag))
        .collect();

        Self {
            sections,
            hero_title: CharReveal::new("We make brands move")
                .with_stagger(config.reveal.char_stagger()),
            hero_subtitle: FadeIn::new(FadeDirection::Up).with_delay(Duration::from_millis(400)),
            marquee: Marquee::new(["Strategy", "Identity", "Web", "Motion", "Campaigns"])
                .with_period(config.timing.marquee_period()),
            heading_text: "WORK",
            heading: StickyHeading::new(config.sticky),
            services,
            stats,
            stats_started: None,
            strip: CardStrip::new(cards),
            contact_title: CharReveal::new("Work with us")
                .with_stagger(config.reveal.char_stagger()),
            width: 0,
            height: 0,
            total_rows: 0,
        }
    }

    /// Lay sections out for a viewport and attach every watcher.
    /// Mounting is idempotent, so resizes only move section bounds.
    pub fn layout(&mut self, width: u16, height: u16, scroll: usize) {
        let viewport_rows = height as usize;
        let mut top = 0;
        for section in &mut self.sections {
            section.top = top;
            section.height = match section.kind {
                SectionKind::Hero => viewport_rows.max(8),
                SectionKind::Marquee => MARQUEE_ROWS,
                SectionKind::Work => viewport_rows * WORK_VIEWPORTS,
                SectionKind::Services => 3 + self.services.len() * SERVICE_ROWS,
                SectionKind::Stats => STATS_ROWS,
                SectionKind::Strip => STRIP_ROWS,
                SectionKind::Contact => (viewport_rows / 2).max(6),
            };
            top += section.height;
        }
        self.total_rows = top;
        self.width = width;
        self.height = height;
        self.strip.set_viewport_width(width.saturating_sub(4));

        for section in &mut self.sections {
            let rect = section.rect(scroll, width);
            section.reveal.mount(Some(&rect));
        }
        if !self.heading.is_mounted() {
            self.heading.mount(self.work_geometry(scroll));
        }
        debug!(width, height, total_rows = self.total_rows, "Page laid out");
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Scroll geometry of the work container at `scroll`
    pub fn work_geometry(&self, scroll: usize) -> Option<ScrollGeometry> {
        let work = self.section(SectionKind::Work)?;
        if self.height == 0 {
            return None;
        }
        Some(ScrollGeometry::new(
            work.top as f64 - scroll as f64,
            work.height as f64,
            self.height as f64,
        ))
    }

    /// Advance scroll-driven state for one frame. Returns true when any
    /// reveal flipped or the heading changed.
    pub fn on_frame(&mut self, scroll: usize, now: Instant) -> bool {
        let viewport = self.viewport();
        let width = self.width;
        let mut changed = false;

        for section in &mut self.sections {
            let rect = section.rect(scroll, width);
            if section.reveal.update(Some(&rect), &viewport, now) {
                debug!(
                    kind = ?section.kind,
                    in_view = section.reveal.is_in_view(),
                    "Reveal flipped"
                );
                changed = true;
            }
        }

        let geometry = self.work_geometry(scroll);
        changed |= self.heading.on_scroll(geometry);

        let stats_visible = self
            .section(SectionKind::Stats)
            .is_some_and(|s| s.reveal.is_in_view());
        if stats_visible && self.stats_started.is_none() {
            for stat in &mut self.stats {
                stat.counter.start();
            }
            self.stats_started = Some(now);
        }

        changed
    }

    /// Time since the stats counters started
    pub fn stats_elapsed(&self, now: Instant) -> Option<Duration> {
        self.stats_started.map(|at| now.saturating_duration_since(at))
    }

    /// Reset reveals and counters so they play again
    pub fn replay(&mut self, scroll: usize) {
        for section in &mut self.sections {
            section.reveal.reset();
            let rect = section.rect(scroll, self.width);
            section.reveal.mount(Some(&rect));
        }
        for stat in &mut self.stats {
            stat.counter =
                AnimatedCounter::with_duration(stat.counter.target(), stat.counter.duration());
        }
        self.stats_started = None;
    }
}
