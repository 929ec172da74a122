//! Views that render from the shared viewer context

mod card_stack;
mod detail;
mod header;
mod timeline_browser;
mod timeline_strip;

pub use card_stack::CardStackView;
pub use detail::DetailPanel;
pub use header::header_ui;
pub use timeline_browser::TimelineBrowserView;
pub use timeline_strip::TimelineStripView;
