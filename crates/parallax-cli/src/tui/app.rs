//! Playground application state and main loop

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use parallax_core::{MomentumScroller, ParallaxConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::tui::components::{StatusInfo, StripState, Toast, ToastQueue};
use crate::tui::state::{LayoutState, Page, ScrollState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Rows reserved below the page for the status bar
pub const STATUS_ROWS: u16 = 1;

pub struct App {
    pub config: ParallaxConfig,
    pub theme: Theme,
    pub page: Page,
    pub scroll: ScrollState,
    pub layout: LayoutState,
    /// Drives the card strip
    pub scroller: MomentumScroller,
    pub toasts: ToastQueue,
    /// Marquee clock origin
    pub started_at: Instant,
    pub should_quit: bool,
    pub needs_redraw: bool,
    shutdown: CancellationToken,
}

impl App {
    pub fn new(config: ParallaxConfig, theme_name: &str, shutdown: CancellationToken) -> Self {
        let theme = THEME_REGISTRY.get_or_default(theme_name).clone();
        let mut page = Page::new(&config);
        let mut scroller = MomentumScroller::new(config.momentum);
        scroller.attach(Some(&mut page.strip));

        Self {
            config,
            theme,
            page,
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            scroller,
            toasts: ToastQueue::new(),
            started_at: Instant::now(),
            should_quit: false,
            needs_redraw: true,
            shutdown,
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.needs_redraw = true;
    }

    /// Enter the alternate screen, run until quit, always restore the terminal
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let result = self.main_loop(&mut terminal).await;

        self.scroller.detach(Some(&mut self.page.strip));
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let size = terminal.size()?;
        self.resize(size.width, size.height);

        let period = self.config.timing.frame_period();
        let mut frames = tokio::time::interval(period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(?period, "Playground started");

        loop {
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    info!("Shutdown requested");
                    break;
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => warn!("Terminal event error: {}", e),
                    None => break,
                },
                _ = frames.tick() => self.tick(Instant::now()),
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => self.resize(width, height),
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Re-layout the page for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        let page_height = height.saturating_sub(STATUS_ROWS);
        // Rightmost column holds the page scrollbar
        let page_width = width.saturating_sub(1);
        self.page.layout(page_width, page_height, self.scroll.offset);
        self.scroll
            .update_max_scroll(self.page.total_rows(), page_height as usize);
        debug!(width, height, "Resized");
    }

    /// One animation frame: reveals, sticky heading, counters, coast
    pub fn tick(&mut self, now: Instant) {
        self.page.on_frame(self.scroll.offset, now);
        self.scroller.step(&mut self.page.strip);
        self.toasts.tick();
        // Marquee and transitions move every frame
        self.needs_redraw = true;
    }

    /// Time since start, drives the marquee
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn status_info(&self) -> StatusInfo {
        let heading = self.page.heading.style();
        let strip_state = if self.scroller.is_dragging() {
            StripState::Dragging
        } else if self.scroller.is_coasting() {
            StripState::Coasting
        } else {
            StripState::Idle
        };
        StatusInfo {
            scroll_fraction: self.scroll.fraction(),
            heading_phase: self.page.heading.phase(),
            heading_font_vw: heading.font_size_vw,
            strip_state,
            strip_velocity: self.scroller.velocity(),
        }
    }
}
