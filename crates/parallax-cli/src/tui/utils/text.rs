//! Width-aware text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` display columns, ending with an ellipsis when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Spread glyphs apart with `gap` spaces, used to render heading scale
pub fn letter_spaced(text: &str, gap: usize) -> String {
    let pad = " ".repeat(gap);
    let mut out = String::with_capacity(text.len() * (gap + 1));
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(&pad);
        }
        out.push(ch);
    }
    out
}
