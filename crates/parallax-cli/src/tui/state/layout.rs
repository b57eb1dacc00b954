//! Layout State - cached areas for hit testing
//!
//! Updated each frame during rendering, used for mouse event handling.

use ratatui::layout::Rect;

#[derive(Debug, Default)]
pub struct LayoutState {
    /// Scrolling page viewport
    pub page_area: Option<Rect>,
    /// On-screen part of the card strip (drag surface)
    pub strip_area: Option<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_strip(&self, column: u16, row: u16) -> bool {
        contains(self.strip_area, column, row)
    }

    pub fn in_page(&self, column: u16, row: u16) -> bool {
        contains(self.page_area, column, row)
    }
}

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|a| {
        column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
    })
}
