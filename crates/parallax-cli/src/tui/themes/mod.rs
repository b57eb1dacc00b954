//! Color themes for the playground

mod registry;

use ratatui::style::Color;

pub use registry::THEME_REGISTRY;

/// Palette used by every renderer
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub heading_color: Color,
    pub border_color: Color,
    pub card_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub status_bar_bg_color: Color,
    pub scrollbar_fg_color: Color,
    pub scrollbar_bg_color: Color,
}

impl Theme {
    /// Mix `color` into the background at `opacity` (0 = background, 1 = color)
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        blend(color, self.bg_color, opacity)
    }
}

/// Linear RGB blend. Non-RGB colors snap to whichever side dominates.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * opacity).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if opacity >= 0.5 => fg,
        _ => bg,
    }
}

pub(crate) fn dusk() -> Theme {
    Theme {
        name: "dusk".into(),
        display_name: "Dusk".into(),
        bg_color: Color::Rgb(14, 14, 18),
        text_color: Color::Rgb(232, 230, 227),
        dim_color: Color::Rgb(120, 118, 128),
        accent_color: Color::Rgb(255, 92, 57),
        heading_color: Color::Rgb(250, 248, 240),
        border_color: Color::Rgb(52, 50, 60),
        card_color: Color::Rgb(30, 29, 36),
        success_color: Color::Rgb(120, 220, 140),
        warning_color: Color::Rgb(240, 190, 80),
        status_bar_bg_color: Color::Rgb(24, 23, 30),
        scrollbar_fg_color: Color::Rgb(255, 92, 57),
        scrollbar_bg_color: Color::Rgb(40, 38, 46),
    }
}

pub(crate) fn paper() -> Theme {
    Theme {
        name: "paper".into(),
        display_name: "Paper".into(),
        bg_color: Color::Rgb(246, 243, 236),
        text_color: Color::Rgb(28, 27, 25),
        dim_color: Color::Rgb(132, 128, 120),
        accent_color: Color::Rgb(36, 84, 255),
        heading_color: Color::Rgb(12, 12, 12),
        border_color: Color::Rgb(210, 205, 196),
        card_color: Color::Rgb(232, 228, 219),
        success_color: Color::Rgb(30, 140, 70),
        warning_color: Color::Rgb(190, 120, 20),
        status_bar_bg_color: Color::Rgb(226, 222, 212),
        scrollbar_fg_color: Color::Rgb(36, 84, 255),
        scrollbar_bg_color: Color::Rgb(218, 214, 204),
    }
}

pub(crate) fn terminal() -> Theme {
    Theme {
        name: "terminal".into(),
        display_name: "Terminal".into(),
        bg_color: Color::Reset,
        text_color: Color::White,
        dim_color: Color::DarkGray,
        accent_color: Color::Magenta,
        heading_color: Color::White,
        border_color: Color::DarkGray,
        card_color: Color::Reset,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        status_bar_bg_color: Color::Reset,
        scrollbar_fg_color: Color::Magenta,
        scrollbar_bg_color: Color::DarkGray,
    }
}
