//! Navigation state shared by every synchronized view

mod engine;
mod gesture;
mod subscriber;

pub use engine::NavigationEngine;
pub use gesture::{resolve_step, GestureAxis, GestureOutcome, GestureSurface, StepDirection};
pub use subscriber::NavigationSubscriber;

/// What the main content region shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Vertically swiped card stack
    #[default]
    CardStack,
    /// Full-width timeline with an inline detail panel
    TimelineBrowser,
}

impl ContentMode {
    pub fn toggled(self) -> Self {
        match self {
            ContentMode::CardStack => ContentMode::TimelineBrowser,
            ContentMode::TimelineBrowser => ContentMode::CardStack,
        }
    }
}

/// Why the current index moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// Direct jump, e.g. tapping a timeline marker
    Jump,
    /// Single step from a button or key
    Step,
    /// Completed swipe on one of the gesture surfaces
    Gesture(GestureSurface),
}

/// A committed change, delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChange {
    IndexChanged {
        from: usize,
        to: usize,
        cause: ChangeCause,
    },
    ModeChanged {
        mode: ContentMode,
    },
}

/// Snapshot of the navigation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationContext {
    pub current_index: usize,
    pub total: usize,
    pub mode: ContentMode,
    /// Surface and live translation of the gesture in progress
    pub drag: Option<(GestureSurface, f32)>,
}

impl NavigationContext {
    /// Live translation on `surface`, zero when that surface is not being dragged
    pub fn drag_offset(&self, surface: GestureSurface) -> f32 {
        match self.drag {
            Some((active, translation)) if active == surface => translation,
            _ => 0.0,
        }
    }
}
