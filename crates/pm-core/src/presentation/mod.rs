//! Pure functions from navigation state to presentation values
//!
//! Every view re-derives what it draws from `(records, current_index,
//! drag_offset)` on each frame; nothing here holds a reference to a view.

mod card_stack;
mod timeline;
mod tween;

pub use card_stack::{card_presentation, card_stack_layout, CardPresentation};
pub use timeline::{
    browser_cards, centered_scroll_offset, strip_markers, BrowserCard, StripMarker,
    TimelineScroller,
};
pub use tween::Tween;
