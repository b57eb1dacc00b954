//! Clipped drawing surface for page content
//!
//! Coordinates are relative to the clip origin and may be negative or run
//! past the edge; anything outside the clip is dropped.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    clip: Rect,
    /// Visible column window, relative to the clip origin
    left: i32,
    right: i32,
}

impl<'a> Canvas<'a> {
    pub fn new(buf: &'a mut Buffer, clip: Rect) -> Self {
        Self {
            buf,
            clip,
            left: 0,
            right: clip.width as i32,
        }
    }

    /// Same coordinates, drawing restricted to columns `left..right`
    pub fn columns(&mut self, left: i32, right: i32) -> Canvas<'_> {
        Canvas {
            buf: &mut *self.buf,
            clip: self.clip,
            left: left.max(self.left),
            right: right.min(self.right),
        }
    }

    pub fn width(&self) -> i32 {
        self.clip.width as i32
    }

    pub fn height(&self) -> i32 {
        self.clip.height as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= 0 && y < self.height()
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char, style: Style) {
        if !self.contains(x, y) {
            return;
        }
        let pos = (self.clip.x + x as u16, self.clip.y + y as u16);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(ch).set_style(style);
        }
    }

    /// Draw `text` starting at column `x`. Returns the column after the text.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut cx = x;
        for ch in text.chars() {
            self.put_char(cx, y, ch, style);
            cx += ch.width().unwrap_or(0) as i32;
        }
        cx
    }

    /// Paint `width` cells of row `y` with `ch`
    pub fn fill_row(&mut self, x: i32, y: i32, width: i32, ch: char, style: Style) {
        for cx in x..x + width {
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, style: Style) {
        for cy in y..y + height {
            self.fill_row(x, cy, width, ' ', style);
        }
    }

    /// Rounded box outline
    pub fn draw_box(&mut self, x: i32, y: i32, width: i32, height: i32, style: Style) {
        if width < 2 || height < 2 {
            return;
        }
        let (right, bottom) = (x + width - 1, y + height - 1);
        self.fill_row(x + 1, y, width - 2, '─', style);
        self.fill_row(x + 1, bottom, width - 2, '─', style);
        for cy in y + 1..bottom {
            self.put_char(x, cy, '│', style);
            self.put_char(right, cy, '│', style);
        }
        self.put_char(x, y, '╭', style);
        self.put_char(right, y, '╮', style);
        self.put_char(x, bottom, '╰', style);
        self.put_char(right, bottom, '╯', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clips_outside_area() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let clip = Rect::new(2, 1, 4, 1);
        let mut canvas = Canvas::new(&mut buf, clip);

        let end = canvas.put_str(-2, 0, "abcdefgh", Style::default());
        assert_eq!(end, 6);
        canvas.put_str(0, 1, "zz", Style::default());

        let row: String = (0..10).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "  cdef    ");
        let below: String = (0..10).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(below.trim(), "");
    }

    #[test]
    fn test_column_window() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let mut canvas = Canvas::new(&mut buf, area);
        canvas.columns(3, 6).put_str(0, 0, "abcdefghij", Style::default());

        let row: String = (0..10).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "   def    ");
    }

    #[test]
    fn test_box_corners() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        Canvas::new(&mut buf, area).draw_box(0, 0, 6, 4, Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(5, 3)].symbol(), "╯");
        assert_eq!(buf[(0, 2)].symbol(), "│");
        assert_eq!(buf[(3, 0)].symbol(), "─");
    }
}
