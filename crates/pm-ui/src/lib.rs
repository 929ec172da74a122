//! User interface components for the Prime Ministers browser
//! 
//! This crate provides the egui views: the header, the swipeable card
//! stack, the bottom timeline strip, the full timeline browser and the
//! detail overlay. Views read from `pm_core::ViewerContext` and only change
//! state through its navigation engine.

pub mod theme;
pub mod views;
pub mod widgets;

/// Re-export commonly used types
pub use theme::apply_theme;
pub use views::{
    header_ui, CardStackView, DetailPanel, TimelineBrowserView, TimelineStripView,
};

/// Common icon definitions
pub mod icons {
    pub const STACK: &str = "▤";
    pub const TIMELINE: &str = "⋯";
    pub const CLOSE: &str = "✕";
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";
    pub const LEFT: &str = "◀";
    pub const RIGHT: &str = "▶";
}
