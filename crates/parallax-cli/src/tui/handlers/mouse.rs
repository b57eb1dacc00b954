//! Mouse event handling
//!
//! Wheel scrolls the page. Left-button press on the card strip starts a
//! drag; moves and the release are taken from anywhere on screen while
//! the drag is live, so the strip keeps tracking outside its own bounds.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use parallax_core::momentum::InputKind;
use parallax_core::DragSurface;

use crate::tui::app::App;
use crate::tui::state::CARD_WIDTH;

/// Rows per wheel notch
const WHEEL_STEP: usize = 3;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown if self.layout.in_page(mouse.column, mouse.row) => {
                self.scroll.scroll_down(WHEEL_STEP);
            }
            MouseEventKind::ScrollUp if self.layout.in_page(mouse.column, mouse.row) => {
                self.scroll.scroll_up(WHEEL_STEP);
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight
                if self.layout.in_strip(mouse.column, mouse.row) =>
            {
                self.nudge_strip(mouse.kind == MouseEventKind::ScrollRight);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.in_strip(mouse.column, mouse.row) {
                    self.scroller.press(
                        &mut self.page.strip,
                        mouse.column as f64,
                        InputKind::Pointer,
                    );
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.scroller.captures_document_events() {
                    self.scroller
                        .drag_to(&mut self.page.strip, mouse.column as f64);
                }
            }
            MouseEventKind::Up(_) => {
                if self.scroller.captures_document_events() {
                    self.scroller.release(&mut self.page.strip);
                }
            }
            _ => {}
        }
    }

    /// Horizontal wheel steps the strip by a third of a card
    fn nudge_strip(&mut self, forward: bool) {
        // The wheel step replaces any momentum still in flight
        self.scroller.stop_coast();
        let step = (CARD_WIDTH / 3) as f64;
        let strip = &mut self.page.strip;
        let offset = strip.scroll_offset();
        strip.set_scroll_offset(if forward { offset + step } else { offset - step });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::KeyModifiers;
    use parallax_core::momentum::Cursor;
    use parallax_core::ParallaxConfig;
    use ratatui::layout::Rect;
    use tokio_util::sync::CancellationToken;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_strip() -> App {
        let mut app = App::new(ParallaxConfig::default(), "dusk", CancellationToken::new());
        app.resize(81, 41);
        app.layout.page_area = Some(Rect::new(0, 0, 80, 40));
        app.layout.strip_area = Some(Rect::new(2, 10, 76, 6));
        app
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(app.scroll.offset, WHEEL_STEP);
        app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 5, 5));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_wheel_over_status_bar_ignored() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 5, 40));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_press_outside_strip_does_not_drag() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 2));
        assert!(app.scroller.is_idle());
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 2));
        assert_eq!(app.page.strip.scroll_offset(), 0.0);
    }

    #[test]
    fn test_drag_moves_strip_and_coasts_after_release() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 60, 12));
        assert!(app.scroller.is_dragging());
        assert_eq!(app.page.strip.cursor(), Cursor::Grabbing);

        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 55, 12));
        // Drags keep tracking after the pointer leaves the strip
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 50, 30));
        assert_eq!(app.page.strip.scroll_offset(), 10.0);

        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 50, 30));
        assert!(app.scroller.is_coasting());
        assert_eq!(app.page.strip.cursor(), Cursor::Grab);

        let now = Instant::now();
        for _ in 0..200 {
            app.tick(now);
        }
        assert!(app.scroller.is_idle());
        assert!(app.page.strip.scroll_offset() > 10.0);
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5));
        assert!(app.scroller.is_idle());
    }

    #[test]
    fn test_horizontal_wheel_nudges_strip() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::ScrollRight, 10, 12));
        assert_eq!(app.page.strip.scroll_offset(), (CARD_WIDTH / 3) as f64);
        app.handle_mouse_event(mouse(MouseEventKind::ScrollLeft, 10, 12));
        assert_eq!(app.page.strip.scroll_offset(), 0.0);
    }

    #[test]
    fn test_horizontal_wheel_stops_coast() {
        let mut app = app_with_strip();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 60, 12));
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 12));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 12));
        assert!(app.scroller.is_coasting());

        app.handle_mouse_event(mouse(MouseEventKind::ScrollLeft, 10, 12));
        assert!(app.scroller.is_idle());
        let nudged = app.page.strip.scroll_offset();
        assert_eq!(nudged, 20.0 - (CARD_WIDTH / 3) as f64);

        app.tick(Instant::now());
        assert_eq!(app.page.strip.scroll_offset(), nudged);
    }
}
