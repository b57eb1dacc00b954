//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use crate::tui::app::App;
use crate::tui::components::Toast;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }

        let page_rows = self.page.viewport().height.max(1.0) as usize;
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Char('q') | KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Down | KeyCode::Char('j'), _) => {
                self.scroll.scroll_down(1);
            }
            (KeyCode::Up | KeyCode::Char('k'), _) => {
                self.scroll.scroll_up(1);
            }
            (KeyCode::PageDown | KeyCode::Char(' '), _) => {
                self.scroll.scroll_down(page_rows);
            }
            (KeyCode::PageUp, _) => {
                self.scroll.scroll_up(page_rows);
            }
            (KeyCode::Home | KeyCode::Char('g'), _) => {
                self.scroll.scroll_to_top();
            }
            (KeyCode::End | KeyCode::Char('G'), _) => {
                self.scroll.scroll_to_end();
            }
            (KeyCode::Char('r'), _) => {
                self.page.replay(self.scroll.offset);
                info!(offset = self.scroll.offset, "Replaying reveals");
                self.show_toast(Toast::success("Replaying reveals"));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use parallax_core::ParallaxConfig;
    use tokio_util::sync::CancellationToken;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut app = App::new(ParallaxConfig::default(), "dusk", CancellationToken::new());
        app.resize(80, 31);
        app
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            app.handle_key(key(code));
            assert!(app.should_quit);
        }
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.scroll.offset, 1);
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll.offset, 31);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll.offset, app.scroll.max_scroll);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.scroll.offset, 0);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_replay_shows_toast() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.toasts.visible().count(), 1);
    }
}
