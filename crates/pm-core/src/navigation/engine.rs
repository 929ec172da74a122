//! Navigation engine implementation

use super::{
    resolve_step, ChangeCause, ContentMode, GestureOutcome, GestureSurface, NavigationChange,
    NavigationContext, NavigationSubscriber, StepDirection,
};
use crate::settings::GestureSettings;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, info, trace, warn};

/// A drag that has begun but not ended
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    surface: GestureSurface,
    translation: f32,
}

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigationState {
    current_index: usize,
    total: usize,
    mode: ContentMode,
    drag: Option<ActiveDrag>,
}

impl NavigationState {
    fn clamp(&self, index: isize) -> usize {
        let last = self.total.saturating_sub(1) as isize;
        index.clamp(0, last.max(0)) as usize
    }

    /// Move to `target`, returning the change if the index actually moved
    fn move_to(&mut self, target: usize, cause: ChangeCause) -> Option<NavigationChange> {
        if target == self.current_index {
            return None;
        }
        let from = self.current_index;
        self.current_index = target;
        Some(NavigationChange::IndexChanged { from, to: target, cause })
    }

    fn step(&mut self, direction: StepDirection, cause: ChangeCause) -> Option<NavigationChange> {
        let target = match direction {
            StepDirection::Forward => self.current_index + 1,
            StepDirection::Backward => self.current_index.checked_sub(1)?,
        };
        if target >= self.total {
            return None;
        }
        self.move_to(target, cause)
    }
}

/// Single owner and only writer of the current index
pub struct NavigationEngine {
    state: Arc<RwLock<NavigationState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
    gestures: GestureSettings,
}

impl NavigationEngine {
    /// Create an engine over `total` records, starting at index 0
    pub fn new(total: usize, gestures: GestureSettings) -> Self {
        let state = NavigationState {
            current_index: 0,
            total,
            mode: ContentMode::default(),
            drag: None,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            gestures,
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.read().current_index
    }

    pub fn total(&self) -> usize {
        self.state.read().total
    }

    pub fn mode(&self) -> ContentMode {
        self.state.read().mode
    }

    /// Threshold a drag on `surface` has to exceed
    pub fn threshold(&self, surface: GestureSurface) -> f32 {
        match surface {
            GestureSurface::CardStack => self.gestures.card_stack_threshold,
            GestureSurface::TimelineStrip => self.gestures.timeline_strip_threshold,
            GestureSurface::TimelineBrowser => self.gestures.timeline_browser_threshold,
        }
    }

    /// Jump straight to `index`, clamped into range
    pub fn set_index(&self, index: isize) -> bool {
        let mut state = self.state.write();
        let target = state.clamp(index);
        let change = state.move_to(target, ChangeCause::Jump);
        drop(state);
        self.commit(change)
    }

    /// Move forward by one; no-op on the last record
    pub fn advance(&self) -> bool {
        let mut state = self.state.write();
        let change = state.step(StepDirection::Forward, ChangeCause::Step);
        drop(state);
        self.commit(change)
    }

    /// Move back by one; no-op on the first record
    pub fn retreat(&self) -> bool {
        let mut state = self.state.write();
        let change = state.step(StepDirection::Backward, ChangeCause::Step);
        drop(state);
        self.commit(change)
    }

    /// Start tracking a drag on `surface`
    pub fn begin_drag(&self, surface: GestureSurface) {
        let mut state = self.state.write();
        if let Some(stale) = state.drag {
            warn!(
                "Drag on {:?} began while {:?} was still active, discarding the old one",
                surface, stale.surface
            );
        }
        state.drag = Some(ActiveDrag { surface, translation: 0.0 });
        trace!("Drag began on {:?}", surface);
    }

    /// Record the live translation of the active drag
    pub fn update_drag(&self, translation: f32) {
        let mut state = self.state.write();
        match state.drag.as_mut() {
            Some(drag) => {
                drag.translation = translation;
                trace!("Drag on {:?} at {:.1}", drag.surface, translation);
            }
            None => trace!("Ignoring drag update with no active drag"),
        }
    }

    /// Finish a drag with its final translation along the surface's axis.
    ///
    /// Commits at most one step, then resets the live offset to zero.
    pub fn end_drag(&self, surface: GestureSurface, translation: f32) -> GestureOutcome {
        let threshold = self.threshold(surface);
        let mut state = self.state.write();
        state.drag = None;

        let cause = ChangeCause::Gesture(surface);
        let (outcome, change) = match resolve_step(translation, threshold) {
            Some(StepDirection::Forward) => match state.step(StepDirection::Forward, cause) {
                Some(change) => (GestureOutcome::Advanced, Some(change)),
                None => (GestureOutcome::Unchanged, None),
            },
            Some(StepDirection::Backward) => match state.step(StepDirection::Backward, cause) {
                Some(change) => (GestureOutcome::Retreated, Some(change)),
                None => (GestureOutcome::Unchanged, None),
            },
            None => (GestureOutcome::Unchanged, None),
        };
        drop(state);

        trace!(
            "Drag ended on {:?} at {:.1} (threshold {}): {:?}",
            surface,
            translation,
            threshold,
            outcome
        );
        self.commit(change);
        outcome
    }

    /// Live translation of the drag on `surface`, zero when at rest
    pub fn drag_offset(&self, surface: GestureSurface) -> f32 {
        self.get_context().drag_offset(surface)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.read().drag.is_some()
    }

    /// Switch between the card stack and the timeline browser
    pub fn toggle_mode(&self) -> ContentMode {
        let mode = self.mode().toggled();
        self.set_mode(mode);
        mode
    }

    /// Change the content mode; the current index is preserved
    pub fn set_mode(&self, mode: ContentMode) {
        let mut state = self.state.write();
        if state.mode == mode {
            return;
        }
        state.mode = mode;
        state.drag = None;
        drop(state);

        info!("Content mode switched to {:?}", mode);
        self.notify_subscribers(&NavigationChange::ModeChanged { mode });
    }

    /// Get current navigation context
    pub fn get_context(&self) -> NavigationContext {
        let state = self.state.read();
        NavigationContext {
            current_index: state.current_index,
            total: state.total,
            mode: state.mode,
            drag: state.drag.map(|drag| (drag.surface, drag.translation)),
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    fn commit(&self, change: Option<NavigationChange>) -> bool {
        match change {
            Some(change) => {
                if let NavigationChange::IndexChanged { from, to, cause } = change {
                    debug!("Index {} -> {} ({:?})", from, to, cause);
                }
                self.notify_subscribers(&change);
                true
            }
            None => false,
        }
    }

    /// Notify all subscribers of a committed change
    fn notify_subscribers(&self, change: &NavigationChange) {
        let context = self.get_context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(change, &context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn engine() -> NavigationEngine {
        NavigationEngine::new(24, GestureSettings::default())
    }

    #[derive(Default)]
    struct Recorder {
        changes: Mutex<Vec<NavigationChange>>,
    }

    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, change: &NavigationChange, _context: &NavigationContext) {
            self.changes.lock().push(*change);
        }
    }

    #[test]
    fn test_set_index_every_position() {
        let nav = engine();
        for i in 0..24 {
            nav.set_index(i);
            assert_eq!(nav.current_index(), i as usize);
        }
    }

    #[test]
    fn test_set_index_clamps() {
        let nav = engine();
        nav.set_index(100);
        assert_eq!(nav.current_index(), 23);
        nav.set_index(-7);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_set_index_same_value_is_noop() {
        let nav = engine();
        nav.set_index(4);
        assert!(!nav.set_index(4));
    }

    #[test]
    fn test_boundaries_are_noops() {
        let nav = engine();
        assert!(!nav.retreat());
        assert_eq!(nav.current_index(), 0);

        nav.set_index(23);
        assert!(!nav.advance());
        assert_eq!(nav.current_index(), 23);
    }

    #[test]
    fn test_small_drag_snaps_back() {
        let nav = engine();
        nav.set_index(3);
        nav.begin_drag(GestureSurface::CardStack);
        nav.update_drag(-30.0);
        assert_eq!(nav.drag_offset(GestureSurface::CardStack), -30.0);

        let outcome = nav.end_drag(GestureSurface::CardStack, -30.0);
        assert_eq!(outcome, GestureOutcome::Unchanged);
        assert_eq!(nav.current_index(), 3);
        assert_eq!(nav.drag_offset(GestureSurface::CardStack), 0.0);
        assert!(!nav.is_dragging());
    }

    #[test]
    fn test_large_drag_moves_one_step() {
        let nav = engine();
        nav.begin_drag(GestureSurface::CardStack);
        let outcome = nav.end_drag(GestureSurface::CardStack, -500.0);
        assert_eq!(outcome, GestureOutcome::Advanced);
        assert_eq!(nav.current_index(), 1);

        nav.begin_drag(GestureSurface::CardStack);
        let outcome = nav.end_drag(GestureSurface::CardStack, 900.0);
        assert_eq!(outcome, GestureOutcome::Retreated);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_surfaces_use_their_own_threshold() {
        let nav = engine();
        // 40 clears the strip's 30 but not the browser's 50
        assert_eq!(nav.end_drag(GestureSurface::TimelineBrowser, -40.0), GestureOutcome::Unchanged);
        assert_eq!(nav.end_drag(GestureSurface::TimelineStrip, -40.0), GestureOutcome::Advanced);
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_drag_at_boundary_is_unchanged() {
        let nav = engine();
        assert_eq!(nav.end_drag(GestureSurface::CardStack, 200.0), GestureOutcome::Unchanged);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_mode_toggle_preserves_index() {
        let nav = engine();
        nav.set_index(9);
        nav.begin_drag(GestureSurface::CardStack);
        assert_eq!(nav.toggle_mode(), ContentMode::TimelineBrowser);
        assert_eq!(nav.current_index(), 9);
        assert!(!nav.is_dragging());
        assert_eq!(nav.toggle_mode(), ContentMode::CardStack);
        assert_eq!(nav.current_index(), 9);
    }

    #[test]
    fn test_subscribers_only_see_real_changes() {
        let nav = engine();
        let recorder = Arc::new(Recorder::default());
        nav.add_subscriber(recorder.clone());

        nav.retreat();
        nav.set_index(0);
        nav.end_drag(GestureSurface::CardStack, -10.0);
        assert!(recorder.changes.lock().is_empty());

        nav.end_drag(GestureSurface::CardStack, -80.0);
        nav.set_index(23);
        nav.toggle_mode();

        let changes = recorder.changes.lock();
        assert_eq!(
            changes.as_slice(),
            &[
                NavigationChange::IndexChanged {
                    from: 0,
                    to: 1,
                    cause: ChangeCause::Gesture(GestureSurface::CardStack),
                },
                NavigationChange::IndexChanged { from: 1, to: 23, cause: ChangeCause::Jump },
                NavigationChange::ModeChanged { mode: ContentMode::TimelineBrowser },
            ]
        );
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let nav = engine();
        let recorder = Arc::new(Recorder::default());
        nav.add_subscriber(recorder.clone());
        drop(recorder);

        nav.advance();
        assert!(nav.subscribers.read().is_empty());
    }

    #[test]
    fn test_empty_engine_never_moves() {
        let nav = NavigationEngine::new(0, GestureSettings::default());
        assert!(!nav.advance());
        assert!(!nav.set_index(5));
        assert_eq!(nav.current_index(), 0);
    }
}
