//! Utilities for the TUI
//!
//! Text measurement helpers shared by the renderers.

mod text;

pub use text::{letter_spaced, truncate_ellipsis};
