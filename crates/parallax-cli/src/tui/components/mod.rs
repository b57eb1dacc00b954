//! UI components for the playground
//!
//! Reusable rendering components: status bar, scrollbars, toasts.

pub mod scrollbars;
pub mod status_bar;
pub mod toast;

pub use scrollbars::{render_hscrollbar, render_page_scrollbar};
pub use status_bar::{render_status_bar, StatusInfo, StripState};
pub use toast::{render_toasts, Toast, ToastQueue};
