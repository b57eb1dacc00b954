//! Event handlers and rendering for the playground app

mod keyboard;
mod mouse;
mod rendering;
