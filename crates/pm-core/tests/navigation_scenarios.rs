//! End-to-end navigation scenarios through the public API

use std::sync::Arc;

use pm_core::presentation::{card_stack_layout, centered_scroll_offset, TimelineScroller};
use pm_core::{GestureOutcome, GestureSurface, ViewerContext};

#[test]
fn launch_starts_on_first_record() {
    let viewer = ViewerContext::default();
    assert_eq!(viewer.records.len(), 24);
    assert_eq!(viewer.navigation.current_index(), 0);
    assert_eq!(viewer.current_record().map(|r| r.number), Some(1));
}

#[test]
fn upward_card_swipe_advances_one() {
    let viewer = ViewerContext::default();
    let nav = &viewer.navigation;

    nav.begin_drag(GestureSurface::CardStack);
    nav.update_drag(-40.0);
    nav.update_drag(-80.0);
    assert_eq!(nav.end_drag(GestureSurface::CardStack, -80.0), GestureOutcome::Advanced);

    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.drag_offset(GestureSurface::CardStack), 0.0);
}

#[test]
fn huge_swipe_is_still_one_step() {
    let viewer = ViewerContext::default();
    let nav = &viewer.navigation;

    nav.begin_drag(GestureSurface::CardStack);
    for step in 1..=50 {
        nav.update_drag(-10.0 * step as f32);
    }
    nav.end_drag(GestureSurface::CardStack, -500.0);
    assert_eq!(nav.current_index(), 1);
}

#[test]
fn tapping_last_marker_jumps_and_centres() {
    let viewer = ViewerContext::default();
    let scroller = Arc::new(TimelineScroller::new());
    viewer.navigation.add_subscriber(scroller.clone());

    viewer.navigation.set_index(7);
    scroller.take_pending();

    viewer.navigation.set_index(23);
    assert_eq!(viewer.navigation.current_index(), 23);

    let target = scroller.take_pending().expect("strip should be asked to scroll");
    assert_eq!(target, 23);

    let timeline = &viewer.settings.timeline;
    let offset = centered_scroll_offset(
        target,
        timeline.strip_marker_width,
        timeline.strip_padding,
        viewer.records.len(),
        400.0,
    );
    assert!(offset > 0.0);
}

#[test]
fn detail_keeps_its_record_while_navigating() {
    let viewer = ViewerContext::default();
    viewer.navigation.set_index(5);

    let detail = viewer.open_detail().expect("index 5 exists");
    assert!(viewer.navigation.advance());
    assert_eq!(viewer.navigation.current_index(), 6);

    assert_eq!(detail.record().number, 6);
    assert_eq!(viewer.current_record().map(|r| r.number), Some(7));
}

#[test]
fn current_card_is_upright_at_rest() {
    let viewer = ViewerContext::default();
    viewer.navigation.set_index(12);
    let context = viewer.navigation.get_context();

    let cards = card_stack_layout(
        viewer.records.len(),
        context.current_index,
        context.drag_offset(GestureSurface::CardStack),
        800.0,
        &viewer.settings.card_stack,
    );
    assert_eq!(cards[12].opacity, 1.0);
    assert_eq!(cards[12].scale, 1.0);
    assert_eq!(cards[12].offset, 0.0);
}
