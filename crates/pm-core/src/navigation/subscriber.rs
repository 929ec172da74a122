//! Navigation subscriber trait

use super::{NavigationChange, NavigationContext};

/// Trait for components that react to navigation changes
///
/// Subscribers are notified after the state lock is released. A subscriber
/// must only record what it needs for its next frame; calling back into the
/// engine from here is not supported.
pub trait NavigationSubscriber: Send + Sync {
    /// Called once per committed index or mode change
    fn on_navigation_change(&self, change: &NavigationChange, context: &NavigationContext);
}
