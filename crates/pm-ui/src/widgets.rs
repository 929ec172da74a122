//! Small painting helpers and gesture plumbing shared by the views

use std::sync::Arc;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Response, Rounding, Stroke, Ui, Vec2};
use pm_core::navigation::GestureAxis;
use pm_core::presentation::{TimelineScroller, Tween};
use pm_core::{GestureOutcome, GestureSurface, NavigationEngine, Record};

use crate::theme;

/// Feeds one egui drag into the navigation engine.
///
/// The translation is accumulated from per-frame deltas along the surface's
/// axis, so the engine sees `begin → update* → end` in order.
#[derive(Debug, Default)]
pub struct DragTracker {
    translation: f32,
}

impl DragTracker {
    pub fn handle(
        &mut self,
        response: &Response,
        navigation: &NavigationEngine,
        surface: GestureSurface,
    ) -> Option<GestureOutcome> {
        if response.drag_started() {
            self.translation = 0.0;
            navigation.begin_drag(surface);
        }

        if response.dragged() {
            let delta = response.drag_delta();
            self.translation += match surface.axis() {
                GestureAxis::Vertical => delta.y,
                GestureAxis::Horizontal => delta.x,
            };
            navigation.update_drag(self.translation);
        }

        if response.drag_released() {
            let translation = std::mem::take(&mut self.translation);
            return Some(navigation.end_drag(surface, translation));
        }

        None
    }
}

/// Keeps a horizontal scroll area centred on the current index.
///
/// Owns a `TimelineScroller` subscribed to the engine and turns its pending
/// targets into eased scroll offsets.
pub struct AutoCenter {
    scroller: Arc<TimelineScroller>,
    tween: Option<Tween>,
    last_offset: f32,
    appeared: bool,
}

impl AutoCenter {
    pub fn new(navigation: &NavigationEngine) -> Self {
        let scroller = Arc::new(TimelineScroller::new());
        navigation.add_subscriber(scroller.clone());
        Self {
            scroller,
            tween: None,
            last_offset: 0.0,
            appeared: false,
        }
    }

    /// Scroll offset to force this frame, `None` to leave the area alone.
    ///
    /// `target_for` maps an index to the offset that centres it.
    pub fn offset(
        &mut self,
        ui: &Ui,
        current: usize,
        duration: f32,
        target_for: impl Fn(usize) -> f32,
    ) -> Option<f32> {
        let first_frame = !self.appeared;
        if first_frame {
            self.appeared = true;
            self.scroller.request(current);
        }

        if let Some(index) = self.scroller.take_pending() {
            let duration = if first_frame { 0.0 } else { duration };
            self.tween = Some(Tween::new(self.last_offset, target_for(index), duration));
        }

        let tween = self.tween.as_mut()?;
        let value = tween.step(ui.input(|i| i.stable_dt));
        if tween.is_finished() {
            self.tween = None;
        } else {
            ui.ctx().request_repaint();
        }
        Some(value)
    }

    /// Remember where the area actually ended up this frame
    pub fn record(&mut self, offset: f32) {
        self.last_offset = offset;
    }
}

/// Black capsule with the party name, returns the rect it occupies
pub fn party_pill(painter: &Painter, left_center: Pos2, label: &str, opacity: f32) -> Rect {
    let galley = painter.layout_no_wrap(
        label.to_uppercase(),
        FontId::monospace(10.0),
        Color32::WHITE.linear_multiply(opacity),
    );
    let size = galley.size() + Vec2::new(20.0, 10.0);
    let rect = Rect::from_min_size(Pos2::new(left_center.x, left_center.y - size.y / 2.0), size);
    painter.rect_filled(rect, Rounding::same(size.y / 2.0), Color32::BLACK.linear_multiply(opacity));
    painter.galley(rect.min + Vec2::new(10.0, 5.0), galley);
    rect
}

/// Greyscale stand-in for the portrait asset, shifted by the face offset
pub fn portrait_placeholder(painter: &Painter, rect: Rect, record: &Record, face_scale: f32, opacity: f32) {
    let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    clipped.rect_filled(rect, Rounding::ZERO, theme::portrait_fill().linear_multiply(opacity));

    let head_radius = rect.width().min(rect.height()) * 0.22;
    let center = rect.center() + Vec2::new(0.0, record.face_offset() * face_scale);
    let silhouette = Color32::from_gray(160).linear_multiply(opacity);
    clipped.circle_filled(center, head_radius, silhouette);
    clipped.circle_filled(
        center + Vec2::new(0.0, head_radius * 2.6),
        head_radius * 1.8,
        silhouette,
    );

    if rect.height() > 80.0 {
        clipped.text(
            rect.right_top() + Vec2::new(-10.0, 10.0),
            Align2::RIGHT_TOP,
            record.image_key(),
            FontId::monospace(10.0),
            Color32::from_gray(120).linear_multiply(opacity),
        );
    }
}

/// Circular portrait used by the timeline browser
pub fn round_portrait(painter: &Painter, center: Pos2, size: f32, record: &Record, selected: bool) {
    let radius = size / 2.0;
    painter.circle_filled(center, radius, theme::portrait_fill());
    let face = center + Vec2::new(0.0, record.face_offset() * 0.3 * (size / 70.0) + radius * 0.05);
    painter.circle_filled(face - Vec2::new(0.0, radius * 0.25), radius * 0.3, Color32::from_gray(160));
    painter.text(
        center + Vec2::new(0.0, radius * 0.45),
        Align2::CENTER_CENTER,
        record.ordinal_label(),
        FontId::monospace(radius * 0.35),
        Color32::from_gray(110),
    );

    let stroke = if selected {
        Stroke::new(3.0, Color32::BLACK)
    } else {
        Stroke::new(1.0, Color32::from_gray(200))
    };
    painter.circle_stroke(center, radius, stroke);
}

/// "▲ SWIPE ▼" or "◀ SWIPE ▶" hint
pub fn swipe_hint(painter: &Painter, center: Pos2, axis: GestureAxis, opacity: f32) {
    let color = Color32::GRAY.linear_multiply(0.5 * opacity);
    let text = match axis {
        GestureAxis::Vertical => format!("{}  SWIPE  {}", crate::icons::UP, crate::icons::DOWN),
        GestureAxis::Horizontal => format!("{}  SWIPE  {}", crate::icons::LEFT, crate::icons::RIGHT),
    };
    painter.text(center, Align2::CENTER_CENTER, text, FontId::monospace(9.0), color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{CardStackView, TimelineStripView};
    use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, RawInput};
    use pm_core::ViewerContext;

    /// Drives a view frame by frame with synthetic pointer input
    struct Harness {
        ctx: Context,
        frames: u32,
    }

    impl Harness {
        fn new() -> Self {
            Self { ctx: Context::default(), frames: 0 }
        }

        fn frame(&mut self, events: Vec<Event>, mut view: impl FnMut(&mut Ui)) {
            self.frames += 1;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(420.0, 800.0))),
                time: Some(f64::from(self.frames) / 60.0),
                events,
                ..Default::default()
            };
            let _ = self.ctx.run(input, |ctx| {
                CentralPanel::default().show(ctx, |ui| view(ui));
            });
        }

        /// Press at `start`, move by `step` per frame `steps` times, release
        fn drag(&mut self, start: Pos2, step: Vec2, steps: usize, mut view: impl FnMut(&mut Ui)) {
            let button = |pos, pressed| Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::default(),
            };

            self.frame(vec![Event::PointerMoved(start)], &mut view);
            self.frame(vec![button(start, true)], &mut view);
            let mut pos = start;
            for _ in 0..steps {
                pos += step;
                self.frame(vec![Event::PointerMoved(pos)], &mut view);
            }
            self.frame(vec![button(pos, false)], &mut view);
            self.frame(Vec::new(), &mut view);
        }
    }

    #[test]
    fn test_card_stack_drag_accumulates_frame_deltas() {
        let viewer = ViewerContext::default();
        let mut view = CardStackView::new();
        let mut harness = Harness::new();
        harness.frame(Vec::new(), |ui| {
            view.ui(ui, &viewer);
        });

        // Every frame moves less than the 50 point threshold on its own
        harness.drag(Pos2::new(210.0, 300.0), Vec2::new(0.0, -20.0), 5, |ui| {
            view.ui(ui, &viewer);
        });
        assert_eq!(viewer.navigation.current_index(), 1);
        assert!(!viewer.navigation.is_dragging());

        // Long swipes still move a single step
        harness.drag(Pos2::new(210.0, 600.0), Vec2::new(0.0, -40.0), 8, |ui| {
            view.ui(ui, &viewer);
        });
        assert_eq!(viewer.navigation.current_index(), 2);

        harness.drag(Pos2::new(210.0, 200.0), Vec2::new(0.0, 20.0), 5, |ui| {
            view.ui(ui, &viewer);
        });
        assert_eq!(viewer.navigation.current_index(), 1);
    }

    #[test]
    fn test_card_stack_short_drag_springs_back() {
        let viewer = ViewerContext::default();
        let mut view = CardStackView::new();
        let mut harness = Harness::new();
        harness.frame(Vec::new(), |ui| {
            view.ui(ui, &viewer);
        });

        harness.drag(Pos2::new(210.0, 300.0), Vec2::new(0.0, -10.0), 3, |ui| {
            view.ui(ui, &viewer);
        });
        assert_eq!(viewer.navigation.current_index(), 0);
        assert_eq!(viewer.navigation.get_context().drag, None);
    }

    #[test]
    fn test_timeline_strip_drag_steps_once() {
        let viewer = ViewerContext::default();
        let mut view = TimelineStripView::new(&viewer);
        let mut harness = Harness::new();
        harness.frame(Vec::new(), |ui| view.ui(ui, &viewer));

        // Each frame stays under the 30 point strip threshold
        harness.drag(Pos2::new(200.0, 24.0), Vec2::new(-25.0, 0.0), 4, |ui| {
            view.ui(ui, &viewer)
        });
        assert_eq!(viewer.navigation.current_index(), 1);

        harness.drag(Pos2::new(300.0, 24.0), Vec2::new(-25.0, 0.0), 8, |ui| {
            view.ui(ui, &viewer)
        });
        assert_eq!(viewer.navigation.current_index(), 2);
    }
}
