//! Status bar component - bottom bar with scroll, heading and strip state

use parallax_core::sticky::HeadingPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Snapshot of the animation state shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    /// Page scroll position as a fraction of the scrollable range
    pub scroll_fraction: f64,
    pub heading_phase: HeadingPhase,
    pub heading_font_vw: f64,
    pub strip_state: StripState,
    pub strip_velocity: f64,
}

/// Momentum scroller phase, flattened for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    Idle,
    Dragging,
    Coasting,
}

impl StripState {
    fn label(&self) -> &'static str {
        match self {
            StripState::Idle => "idle",
            StripState::Dragging => "dragging",
            StripState::Coasting => "coasting",
        }
    }
}

fn phase_label(phase: HeadingPhase) -> &'static str {
    match phase {
        HeadingPhase::Rest => "rest",
        HeadingPhase::Growing => "grow",
        HeadingPhase::Holding => "hold",
        HeadingPhase::Shrinking => "shrink",
    }
}

pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, info: &StatusInfo) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let left_spans = build_left_spans(info, theme);
    let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width.min(u16::MAX as usize) as u16),
            Constraint::Fill(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn build_left_spans<'a>(info: &StatusInfo, theme: &'a Theme) -> Vec<Span<'a>> {
    let sep = || Span::styled(" │ ", Style::default().fg(theme.dim_color));
    let percent = (info.scroll_fraction.clamp(0.0, 1.0) * 100.0).round() as u8;

    let strip_color = match info.strip_state {
        StripState::Idle => theme.dim_color,
        StripState::Dragging | StripState::Coasting => theme.accent_color,
    };

    // Fixed widths keep the bar from jittering while values animate
    vec![
        Span::raw(" "),
        Span::styled("parallax", Style::default().fg(theme.accent_color)),
        sep(),
        Span::styled(
            format!("scroll {:>3}%", percent),
            Style::default().fg(theme.dim_color),
        ),
        sep(),
        Span::styled(
            format!(
                "heading {:<6} {:>4.1}vw",
                phase_label(info.heading_phase),
                info.heading_font_vw
            ),
            Style::default().fg(theme.dim_color),
        ),
        sep(),
        Span::styled(
            format!(
                "strip {:<8} v={:>+6.2}",
                info.strip_state.label(),
                info.strip_velocity
            ),
            Style::default().fg(strip_color),
        ),
    ]
}

/// Key hints, dropped from lowest priority first when space runs out
fn build_commands_for_width(width: usize, theme: &Theme) -> Vec<Span<'_>> {
    let commands: [(&str, &str); 4] = [
        (" q ", "quit "),
        (" ↑↓ ", "scroll "),
        (" drag ", "cards "),
        (" r ", "replay "),
    ];

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc) in commands {
        let cmd_width = key.width() + desc.width() + 1;
        if used_width + cmd_width > width {
            break;
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            key,
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
        used_width += cmd_width;
    }

    spans
}
