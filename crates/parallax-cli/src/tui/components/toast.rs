//! Toast notifications in the top-right corner
//!
//! Used for config fallbacks and playground confirmations.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthChar;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Older toasts are dropped past this many
const MAX_VISIBLE_TOASTS: usize = 3;

/// Lifetime before a toast expires
const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Box width in columns, borders included
const TOAST_WIDTH: u16 = 45;

/// Box height in rows, borders included
const TOAST_HEIGHT: u16 = 3;

/// Blank rows between stacked toasts
const TOAST_GAP: u16 = 1;

/// Severity, picks the border color and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// Confirmation of a playground action (replay)
    Success,
    /// Recoverable problem, such as an ignored config file
    Warning,
}

impl ToastType {
    fn color(&self, theme: &Theme) -> Color {
        match self {
            ToastType::Success => theme.success_color,
            ToastType::Warning => theme.warning_color,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Warning => "!",
        }
    }
}

/// One notification box
#[derive(Debug, Clone)]
pub struct Toast {
    /// Single-line text, truncated to fit the box
    pub message: String,
    pub toast_type: ToastType,
    /// Time on screen before `ToastQueue::tick` drops it
    pub duration: Duration,
    /// Start of the lifetime countdown
    pub created_at: Instant,
}

impl Toast {
    /// Confirmation toast in the theme success color
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    /// Warning toast in the theme warning color
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    /// True once the full duration has passed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Remaining lifetime as a fraction, drives the bottom progress rule
    pub fn progress(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();
        (1.0 - (elapsed / total)).max(0.0)
    }
}

/// Stack of live toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Empty queue
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    /// Add a toast, evicting the oldest when full
    pub fn push(&mut self, toast: Toast) {
        // Same message twice is noise
        if self.toasts.iter().any(|t| t.message == toast.message) {
            return;
        }

        while self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Remove expired toasts, returns true if any were removed
    pub fn tick(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        self.toasts.len() != before
    }

    /// True when nothing is left to draw
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(MAX_VISIBLE_TOASTS)
    }
}

/// Stack the visible toasts down the top-right corner of `area`.
///
/// Nothing is drawn when the area is narrower than one toast.
pub fn render_toasts(buf: &mut Buffer, area: Rect, queue: &ToastQueue, theme: &Theme) {
    if queue.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let start_x = area.x + area.width.saturating_sub(TOAST_WIDTH + 2);

    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + 1 + (i as u16 * (TOAST_HEIGHT + TOAST_GAP));

        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }

        let toast_area = Rect::new(start_x, y, TOAST_WIDTH, TOAST_HEIGHT);
        render_toast(buf, toast_area, toast, theme);
    }
}

/// Draw one rounded box with icon, message and a countdown rule
fn render_toast(buf: &mut Buffer, area: Rect, toast: &Toast, theme: &Theme) {
    let color = toast.toast_type.color(theme);
    let border_style = Style::default().fg(color);
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;
    let content_y = area.y + 1;

    for x in (area.x + 1)..right {
        if let Some(cell) = buf.cell_mut((x, content_y)) {
            cell.set_char(' ');
            cell.set_bg(theme.bg_color);
        }
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_char('─').set_style(border_style);
        }
    }

    for (x, y, ch) in [
        (area.x, area.y, '╭'),
        (right, area.y, '╮'),
        (area.x, bottom, '╰'),
        (right, bottom, '╯'),
        (area.x, content_y, '│'),
        (right, content_y, '│'),
    ] {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(border_style);
        }
    }

    // Bottom rule doubles as the remaining-time bar
    let progress_width = ((area.width - 2) as f32 * toast.progress()) as u16;
    for (i, x) in ((area.x + 1)..right).enumerate() {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            if (i as u16) < progress_width {
                cell.set_char('━').set_fg(color);
            } else {
                cell.set_char('─').set_fg(theme.dim_color);
            }
        }
    }

    let mut cx = area.x + 2;
    for ch in toast.toast_type.icon().chars() {
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch).set_fg(color).set_bg(theme.bg_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
    cx += 1;

    let max_msg_width = (area.width - 5) as usize;
    for ch in truncate_ellipsis(&toast.message, max_msg_width).chars() {
        if cx >= right - 1 {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, content_y)) {
            cell.set_char(ch)
                .set_fg(theme.text_color)
                .set_bg(theme.bg_color);
        }
        cx += UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_messages_ignored() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Saved"));
        queue.push(Toast::success("Saved"));
        assert_eq!(queue.visible().count(), 1);
    }

    #[test]
    fn test_queue_keeps_most_recent() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Toast::warning(format!("warn {i}")));
        }
        assert_eq!(queue.visible().count(), MAX_VISIBLE_TOASTS);
        let newest = queue.visible().next().map(|t| t.message.clone());
        assert_eq!(newest.as_deref(), Some("warn 4"));
    }

    #[test]
    fn test_expired_toasts_removed() {
        let mut queue = ToastQueue::new();
        let mut toast = Toast::success("gone");
        toast.duration = Duration::ZERO;
        queue.push(toast);
        assert!(queue.tick());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_render_draws_border_and_message() {
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("dusk");
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        let mut queue = ToastQueue::new();
        queue.push(Toast::warning("Config invalid"));
        render_toasts(&mut buf, area, &queue, theme);

        let x = 60 - (TOAST_WIDTH + 2);
        assert_eq!(buf[(x, 1)].symbol(), "╭");
        assert_eq!(buf[(x + 2, 2)].symbol(), "!");
        assert_eq!(buf[(x + 4, 2)].symbol(), "C");
    }
}
