//! Scrollbar rendering components
//!
//! Filled track with a solid thumb: ░ (track) and █ (thumb).
//! The page uses the vertical bar, the card strip the horizontal one.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::Theme;

/// Thumb start and length along a track of `len` cells
fn thumb_span(len: usize, offset: usize, total: usize, visible: usize) -> (usize, usize) {
    let thumb_size = ((visible as f32 / total as f32) * len as f32)
        .max(2.0)
        .min(len as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = if max_offset > 0 {
        ((offset.min(max_offset) as f32 / max_offset as f32)
            * len.saturating_sub(thumb_size) as f32)
            .round() as usize
    } else {
        0
    };
    (thumb_pos, thumb_size)
}

/// Vertical 1-column scrollbar
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so a vanished bar leaves no stale glyphs
    for y in area.y..area.y + area.height {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let (thumb_pos, thumb_size) = thumb_span(area.height as usize, offset, total, visible);
    for y in 0..area.height as usize {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Horizontal 1-row scrollbar
pub fn render_hscrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    if total <= visible || area.width == 0 {
        return;
    }

    let (thumb_pos, thumb_size) = thumb_span(area.width as usize, offset, total, visible);
    for x in 0..area.width as usize {
        let is_thumb = x >= thumb_pos && x < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('▀', thumb_color)
        } else {
            ('─', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Page scrollbar on the right edge
pub fn render_page_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    theme: &Theme,
) {
    render_scrollbar(
        buf,
        area,
        offset,
        total,
        visible,
        theme.scrollbar_fg_color,
        theme.scrollbar_bg_color,
    );
}
