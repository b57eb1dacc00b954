//! Scroll State - vertical page scroll position and bounds

/// Manages the page scroll offset (rows)
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll offset (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum scroll offset for bounds checking
    pub max_scroll: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Core Scroll Operations
    // =========================================================================

    /// Returns true when the offset moved
    pub fn scroll_up(&mut self, amount: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_sub(amount);
        self.offset != before
    }

    /// Returns true when the offset moved
    pub fn scroll_down(&mut self, amount: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
        self.offset != before
    }

    pub fn scroll_to_top(&mut self) -> bool {
        let before = self.offset;
        self.offset = 0;
        self.offset != before
    }

    pub fn scroll_to_end(&mut self) -> bool {
        let before = self.offset;
        self.offset = self.max_scroll;
        self.offset != before
    }

    // =========================================================================
    // Bounds Management
    // =========================================================================

    /// Recompute bounds after a layout change, keeping the offset in range
    pub fn update_max_scroll(&mut self, total_rows: usize, visible_rows: usize) {
        self.max_scroll = total_rows.saturating_sub(visible_rows);
        self.offset = self.offset.min(self.max_scroll);
    }

    /// Position within the scrollable range, 0.0 when nothing scrolls
    pub fn fraction(&self) -> f64 {
        if self.max_scroll == 0 {
            return 0.0;
        }
        self.offset as f64 / self.max_scroll as f64
    }
}
