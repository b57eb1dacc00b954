//! Per-section renderers
//!
//! Pixel translations from the reveal styles are scaled down to cells;
//! opacity is rendered by blending toward the background.

use std::time::{Duration, Instant};

use parallax_core::sticky::HeadingStyle;
use parallax_core::{CharReveal, Cursor, StickyScaleMapper};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use super::canvas::Canvas;
use crate::tui::state::{Page, Section, SectionKind, CARD_GAP, CARD_WIDTH};
use crate::tui::themes::Theme;
use crate::tui::utils::letter_spaced;

/// Reveal translations are in px; a row is this many px tall
const PX_PER_ROW: f64 = 10.0;
/// and a column this many px wide
const PX_PER_COL: f64 = 5.0;
/// Letter spacing at the largest heading size
const MAX_HEADING_GAP: f64 = 4.0;
/// Left inset of the card strip
pub const STRIP_INSET: i32 = 2;

/// Inputs shared by every section renderer
pub struct SectionCtx<'t> {
    pub theme: &'t Theme,
    pub now: Instant,
    /// Time since the playground started (marquee clock)
    pub elapsed: Duration,
}

fn rows(px: f64) -> i32 {
    (px / PX_PER_ROW).round() as i32
}

fn cols(px: f64) -> i32 {
    (px / PX_PER_COL).round() as i32
}

fn centered(canvas: &Canvas<'_>, text: &str) -> i32 {
    (canvas.width() - text.width() as i32).max(0) / 2
}

pub fn render_section(
    canvas: &mut Canvas<'_>,
    page: &Page,
    section: &Section,
    y0: i32,
    ctx: &SectionCtx<'_>,
) {
    match section.kind {
        SectionKind::Hero => render_hero(canvas, page, section, y0, ctx),
        SectionKind::Marquee => render_marquee(canvas, page, y0, ctx),
        SectionKind::Work => render_work(canvas, page, section, y0, ctx),
        SectionKind::Services => render_services(canvas, page, section, y0, ctx),
        SectionKind::Stats => render_stats(canvas, page, y0, ctx),
        SectionKind::Strip => render_strip(canvas, page, y0, ctx),
        SectionKind::Contact => render_contact(canvas, page, section, y0, ctx),
    }
}

/// Staggered glyphs, centered on `row`
fn render_char_reveal(
    canvas: &mut Canvas<'_>,
    reveal: &CharReveal,
    section: &Section,
    row: i32,
    ctx: &SectionCtx<'_>,
    style: Style,
) {
    let in_view = section.reveal.is_in_view();
    let glyphs = reveal.glyphs(in_view, section.reveal.since_change(ctx.now));
    let mut x = centered(canvas, reveal.text());
    for glyph in glyphs {
        if glyph.opacity > 0.0 {
            let fg = ctx.theme.fade(ctx.theme.heading_color, glyph.opacity);
            canvas.put_char(x, row + rows(glyph.translate_y), glyph.ch, style.fg(fg));
        }
        x += 1;
    }
}

fn render_hero(
    canvas: &mut Canvas<'_>,
    page: &Page,
    section: &Section,
    y0: i32,
    ctx: &SectionCtx<'_>,
) {
    let mid = y0 + section.height as i32 / 2;
    render_char_reveal(
        canvas,
        &page.hero_title,
        section,
        mid - 2,
        ctx,
        Style::default().add_modifier(Modifier::BOLD),
    );

    let subtitle = "Independent design and motion studio";
    let style = page
        .hero_subtitle
        .style_at(section.reveal.is_in_view(), section.reveal.since_change(ctx.now));
    if style.opacity > 0.0 {
        let fg = ctx.theme.fade(ctx.theme.dim_color, style.opacity);
        let x = centered(canvas, subtitle) + cols(style.translate_x);
        canvas.put_str(
            x,
            mid + 1 + rows(style.translate_y),
            subtitle,
            Style::default().fg(fg),
        );
    }

    let hint = "scroll ↓";
    let x = centered(canvas, hint);
    canvas.put_str(
        x,
        y0 + section.height as i32 - 2,
        hint,
        Style::default().fg(ctx.theme.dim_color),
    );
}

fn render_marquee(canvas: &mut Canvas<'_>, page: &Page, y0: i32, ctx: &SectionCtx<'_>) {
    let rule = Style::default().fg(ctx.theme.border_color);
    let width = canvas.width();
    canvas.fill_row(0, y0, width, '─', rule);
    let window = page.marquee.window(ctx.elapsed, width.max(0) as usize);
    canvas.put_str(0, y0 + 1, &window, Style::default().fg(ctx.theme.accent_color));
    canvas.fill_row(0, y0 + 2, width, '─', rule);
}

/// Letter spacing standing in for font size
pub fn heading_gap(mapper: &StickyScaleMapper, style: &HeadingStyle) -> usize {
    let range = mapper.max_font_vw - mapper.min_font_vw;
    if range <= 0.0 {
        return 0;
    }
    let t = ((style.font_size_vw - mapper.min_font_vw) / range).clamp(0.0, 1.0);
    (t * MAX_HEADING_GAP).round() as usize
}

/// Row of the sticky heading: pinned to the viewport top while the
/// container scrolls past, then pushed down by the vertical offset
pub fn heading_row(
    container_top: i32,
    container_height: i32,
    viewport_height: i32,
    style: &HeadingStyle,
) -> i32 {
    let sticky_top = container_top.max(0).min(container_top + container_height - 1);
    let offset = (style.offset_vh / 100.0 * viewport_height as f64).round() as i32;
    sticky_top + offset
}

fn render_work(
    canvas: &mut Canvas<'_>,
    page: &Page,
    section: &Section,
    y0: i32,
    ctx: &SectionCtx<'_>,
) {
    let style = page.heading.style();
    let height = section.height as i32;

    let caption = Style::default().fg(ctx.theme.dim_color);
    canvas.put_str(2, y0 + 1, "Selected work", caption);

    let gap = heading_gap(page.heading.mapper(), &style);
    let text = letter_spaced(page.heading_text, gap);
    let row = heading_row(y0, height, canvas.height(), &style);
    // Heading never leaves its container
    if row < y0 + height && style.opacity > 0.0 {
        let fg = ctx.theme.fade(ctx.theme.heading_color, style.opacity);
        let x = centered(canvas, &text);
        canvas.put_str(
            x,
            row,
            &text,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        );
    }
}

fn render_services(
    canvas: &mut Canvas<'_>,
    page: &Page,
    section: &Section,
    y0: i32,
    ctx: &SectionCtx<'_>,
) {
    let caption = Style::default().fg(ctx.theme.accent_color);
    canvas.put_str(2, y0 + 1, "Services", caption);

    let in_view = section.reveal.is_in_view();
    let since = section.reveal.since_change(ctx.now);
    for (i, service) in page.services.iter().enumerate() {
        let style = service.fade.style_at(in_view, since);
        if style.opacity <= 0.0 {
            continue;
        }
        let row = y0 + 3 + (i as i32) * 3 + rows(style.translate_y);
        let x = 4 + cols(style.translate_x);
        let title = ctx.theme.fade(ctx.theme.text_color, style.opacity);
        let blurb = ctx.theme.fade(ctx.theme.dim_color, style.opacity);
        canvas.put_str(
            x,
            row,
            &format!("{:02}  {}", i + 1, service.title),
            Style::default().fg(title).add_modifier(Modifier::BOLD),
        );
        canvas.put_str(x + 4, row + 1, service.blurb, Style::default().fg(blurb));
    }
}

fn render_stats(canvas: &mut Canvas<'_>, page: &Page, y0: i32, ctx: &SectionCtx<'_>) {
    let count = page.stats.len().max(1) as i32;
    let column = canvas.width() / count;
    let elapsed = page.stats_elapsed(ctx.now).unwrap_or_default();

    for (i, stat) in page.stats.iter().enumerate() {
        let value = format!("{}{}", stat.counter.value_at(elapsed), stat.suffix);
        let x0 = i as i32 * column;
        let vx = x0 + (column - value.width() as i32).max(0) / 2;
        let lx = x0 + (column - stat.label.width() as i32).max(0) / 2;
        canvas.put_str(
            vx,
            y0 + 2,
            &value,
            Style::default()
                .fg(ctx.theme.heading_color)
                .add_modifier(Modifier::BOLD),
        );
        canvas.put_str(lx, y0 + 4, stat.label, Style::default().fg(ctx.theme.dim_color));
    }
}

/// Screen rows of the cards within the strip section
pub fn strip_card_rows(y0: i32) -> (i32, i32) {
    (y0 + 2, 6)
}

fn render_strip(canvas: &mut Canvas<'_>, page: &Page, y0: i32, ctx: &SectionCtx<'_>) {
    let strip = &page.strip;
    let cursor = match strip.cursor() {
        Cursor::Grab => "[grab]",
        Cursor::Grabbing => "[grabbing]",
    };
    let end = canvas.put_str(
        STRIP_INSET,
        y0,
        "Case studies  ",
        Style::default().fg(ctx.theme.accent_color),
    );
    canvas.put_str(end, y0, cursor, Style::default().fg(ctx.theme.dim_color));

    let (card_top, card_height) = strip_card_rows(y0);
    let view_right = STRIP_INSET + strip.viewport_width() as i32;
    let offset = strip.column_offset() as i32;
    let card_style = Style::default().fg(ctx.theme.border_color);
    let card_bg = Style::default().bg(ctx.theme.card_color);

    let mut window = canvas.columns(STRIP_INSET, view_right);
    for (i, card) in strip.cards().iter().enumerate() {
        let x = STRIP_INSET + (i * (CARD_WIDTH + CARD_GAP)) as i32 - offset;
        if x + CARD_WIDTH as i32 <= STRIP_INSET || x >= view_right {
            continue;
        }
        let width = CARD_WIDTH as i32;
        window.fill(x, card_top, width, card_height, card_bg);
        window.draw_box(x, card_top, width, card_height, card_style);
        window.put_str(
            x + 2,
            card_top + 2,
            &card.title,
            Style::default()
                .fg(ctx.theme.text_color)
                .add_modifier(Modifier::BOLD),
        );
        window.put_str(
            x + 2,
            card_top + 3,
            &card.tag,
            Style::default().fg(ctx.theme.dim_color),
        );
    }
}

fn render_contact(
    canvas: &mut Canvas<'_>,
    page: &Page,
    section: &Section,
    y0: i32,
    ctx: &SectionCtx<'_>,
) {
    let mid = y0 + section.height as i32 / 2;
    render_char_reveal(
        canvas,
        &page.contact_title,
        section,
        mid - 1,
        ctx,
        Style::default().add_modifier(Modifier::BOLD),
    );
    let email = "hello@parallax.studio";
    let x = centered(canvas, email);
    canvas.put_str(
        x,
        mid + 1,
        email,
        Style::default().fg(ctx.theme.accent_color),
    );
}

/// On-screen cells of the card row, for drag hit testing
pub fn strip_hit_area(page_area: Rect, y0: i32, strip_width: u16) -> Option<Rect> {
    let (top, height) = strip_card_rows(y0);
    let visible_top = top.max(0);
    let visible_bottom = (top + height).min(page_area.height as i32);
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Rect::new(
        page_area.x + STRIP_INSET as u16,
        page_area.y + visible_top as u16,
        strip_width,
        (visible_bottom - visible_top) as u16,
    ))
}
