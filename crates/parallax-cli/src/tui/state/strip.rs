//! Horizontally scrolling card strip, the drag-momentum surface

use parallax_core::momentum::{Cursor, DragSurface};

pub const CARD_WIDTH: usize = 26;
pub const CARD_GAP: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub tag: String,
}

impl Card {
    pub fn new(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
        }
    }
}

/// Card row with its own horizontal scroll offset (columns)
#[derive(Debug, Clone)]
pub struct CardStrip {
    cards: Vec<Card>,
    offset: f64,
    viewport_width: f64,
    cursor: Cursor,
    selection_enabled: bool,
}

impl CardStrip {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            offset: 0.0,
            viewport_width: 0.0,
            cursor: Cursor::Grab,
            selection_enabled: true,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Width of every card plus trailing gaps
    pub fn content_width(&self) -> usize {
        self.cards.len() * (CARD_WIDTH + CARD_GAP)
    }

    /// Resize the visible window, keeping the offset in range
    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width as f64;
        let max = self.max_offset();
        self.offset = self.offset.clamp(0.0, max);
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn max_offset(&self) -> f64 {
        (self.content_width() as f64 - self.viewport_width).max(0.0)
    }

    /// Whole-column offset used for rendering
    pub fn column_offset(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl DragSurface for CardStrip {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    fn max_scroll_offset(&self) -> Option<f64> {
        Some(self.max_offset())
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::momentum::InputKind;
    use parallax_core::MomentumScroller;

    fn strip(n: usize) -> CardStrip {
        let cards = (0..n).map(|i| Card::new(format!("Case {i}"), "Brand")).collect();
        let mut strip = CardStrip::new(cards);
        strip.set_viewport_width(80);
        strip
    }

    #[test]
    fn test_offset_clamped_to_content() {
        let mut s = strip(5);
        assert_eq!(s.content_width(), 140);
        s.set_scroll_offset(500.0);
        assert_eq!(s.scroll_offset(), 60.0);
        s.set_scroll_offset(-10.0);
        assert_eq!(s.scroll_offset(), 0.0);
    }

    #[test]
    fn test_narrow_content_never_scrolls() {
        let mut s = strip(2);
        s.set_scroll_offset(30.0);
        assert_eq!(s.scroll_offset(), 0.0);
        assert_eq!(s.max_scroll_offset(), Some(0.0));
    }

    #[test]
    fn test_widening_viewport_clamps_offset() {
        let mut s = strip(5);
        s.set_scroll_offset(60.0);
        s.set_viewport_width(120);
        assert_eq!(s.scroll_offset(), 20.0);
    }

    #[test]
    fn test_drag_and_coast_move_the_strip() {
        let mut s = strip(10);
        let mut scroller = MomentumScroller::default();
        assert!(scroller.attach(Some(&mut s)));

        scroller.press(&mut s, 60.0, InputKind::Pointer);
        assert_eq!(s.cursor(), Cursor::Grabbing);
        assert!(!s.selection_enabled);

        scroller.drag_to(&mut s, 50.0);
        scroller.drag_to(&mut s, 40.0);
        assert_eq!(s.scroll_offset(), 20.0);

        assert!(scroller.release(&mut s));
        assert_eq!(s.cursor(), Cursor::Grab);
        while scroller.step(&mut s) {}
        assert!(s.scroll_offset() > 20.0);
        assert!(scroller.is_idle());
    }
}
