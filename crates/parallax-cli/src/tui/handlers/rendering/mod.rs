//! UI rendering coordinator
//!
//! Lays out page, scrollbar and status bar, then dispatches each visible
//! section to its renderer.

mod canvas;
mod sections;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use self::canvas::Canvas;
use self::sections::{render_section, strip_hit_area, SectionCtx, STRIP_INSET};
use crate::tui::app::{App, STATUS_ROWS};
use crate::tui::components::{
    render_hscrollbar, render_page_scrollbar, render_status_bar, render_toasts,
};
use crate::tui::state::SectionKind;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(STATUS_ROWS)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(rows[0]);
        let (page_area, scrollbar_area, status_area) = (cols[0], cols[1], rows[1]);

        self.layout.page_area = Some(page_area);

        self.render_page(f, page_area, Instant::now());

        render_page_scrollbar(
            f.buffer_mut(),
            scrollbar_area,
            self.scroll.offset,
            self.page.total_rows(),
            page_area.height as usize,
            &self.theme,
        );

        let info = self.status_info();
        render_status_bar(f, status_area, &self.theme, &info);

        render_toasts(f.buffer_mut(), area, &self.toasts, &self.theme);
    }

    fn render_page(&mut self, f: &mut Frame, page_area: Rect, now: Instant) {
        let scroll = self.scroll.offset as i64;
        let viewport_rows = page_area.height as i64;
        let ctx = SectionCtx {
            theme: &self.theme,
            now,
            elapsed: self.elapsed(now),
        };

        let mut strip_area = None;
        let mut strip_scrollbar = None;
        {
            let mut canvas = Canvas::new(f.buffer_mut(), page_area);
            for section in &self.page.sections {
                let y0 = section.top as i64 - scroll;
                let bottom = y0 + section.height as i64;
                if bottom <= 0 || y0 >= viewport_rows {
                    continue;
                }
                let y0 = y0 as i32;
                render_section(&mut canvas, &self.page, section, y0, &ctx);

                if section.kind == SectionKind::Strip {
                    let strip_width = self.page.strip.viewport_width() as u16;
                    strip_area = strip_hit_area(page_area, y0, strip_width);
                    let bar_row = y0 + section.height as i32 - 1;
                    if bar_row >= 0 && bar_row < page_area.height as i32 {
                        strip_scrollbar = Some(Rect::new(
                            page_area.x + STRIP_INSET as u16,
                            page_area.y + bar_row as u16,
                            strip_width,
                            1,
                        ));
                    }
                }
            }
        }
        self.layout.strip_area = strip_area;

        if let Some(bar) = strip_scrollbar {
            let strip = &self.page.strip;
            render_hscrollbar(
                f.buffer_mut(),
                bar,
                strip.column_offset(),
                strip.content_width(),
                strip.viewport_width() as usize,
                self.theme.accent_color,
                self.theme.border_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use parallax_core::ParallaxConfig;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio_util::sync::CancellationToken;

    use crate::tui::app::App;
    use crate::tui::state::SectionKind;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.ui(f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(width: u16, height: u16) -> App {
        let mut app = App::new(ParallaxConfig::default(), "dusk", CancellationToken::new());
        app.resize(width, height);
        app
    }

    #[test]
    fn test_first_frame_shows_hero_and_status() {
        let mut app = app(80, 24);
        let screen = render(&mut app, 80, 24);
        assert!(screen.contains("parallax"));
        assert!(screen.contains("scroll ↓"));
        assert!(app.layout.page_area.is_some());
        assert!(app.layout.strip_area.is_none());
    }

    #[test]
    fn test_strip_area_recorded_when_visible() {
        let mut app = app(80, 24);
        let strip_top = app
            .page
            .section(SectionKind::Strip)
            .map_or(0, |s| s.top);
        app.scroll.scroll_down(strip_top);
        let screen = render(&mut app, 80, 24);
        assert!(screen.contains("Case studies"));
        assert!(screen.contains("Northwind"));
        // Scroll clamps short of the strip top; cards start two rows in
        let expected_row = strip_top - app.scroll.offset + 2;
        let area = app.layout.strip_area.unwrap();
        assert_eq!((area.x, area.y as usize, area.height), (2, expected_row, 6));
    }

    #[test]
    fn test_sticky_heading_rendered_while_holding() {
        let mut app = app(81, 41);
        let work_top = app
            .page
            .section(SectionKind::Work)
            .map_or(0, |s| s.top);
        app.scroll.scroll_down(work_top + 40);
        app.tick(std::time::Instant::now());
        let screen = render(&mut app, 81, 41);
        let lines: Vec<&str> = screen.lines().collect();
        // 35vh of a 40-row page
        assert!(lines[14].contains("W    O    R    K"));
    }
}
