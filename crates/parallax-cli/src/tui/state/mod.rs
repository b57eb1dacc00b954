//! App State Components
//!
//! Page model, scroll position, drag surface and cached layout areas.

mod layout;
mod page;
mod scroll;
mod strip;

pub use layout::LayoutState;
pub use page::{Page, Section, SectionKind};
pub use scroll::ScrollState;
pub use strip::{CARD_GAP, CARD_WIDTH};
