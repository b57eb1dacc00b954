//! Terminal playground for the scroll animation utilities

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod themes;
pub mod utils;

pub use app::App;
pub use themes::THEME_REGISTRY;
