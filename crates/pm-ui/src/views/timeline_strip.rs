//! Bottom timeline strip: one year marker per record

use egui::{Align2, Color32, FontId, Pos2, Response, ScrollArea, Sense, Stroke, Ui, Vec2};
use pm_core::presentation::{centered_scroll_offset, strip_markers, StripMarker};
use pm_core::{GestureSurface, ViewerContext};

use crate::theme;
use crate::widgets::{AutoCenter, DragTracker};

const MARKER_HEIGHT: f32 = 54.0;

/// Timeline strip view state
pub struct TimelineStripView {
    center: AutoCenter,
    drag: DragTracker,
}

impl TimelineStripView {
    /// Create the strip and subscribe it to index changes
    pub fn new(viewer: &ViewerContext) -> Self {
        Self {
            center: AutoCenter::new(&viewer.navigation),
            drag: DragTracker::default(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, viewer: &ViewerContext) {
        let navigation = &viewer.navigation;
        let timeline = &viewer.settings.timeline;
        let current = navigation.current_index();
        let count = viewer.records.len();

        let rect = ui.available_rect_before_wrap();
        ui.painter().hline(rect.x_range(), rect.top(), Stroke::new(1.0, theme::hairline()));

        let viewport = ui.available_width();
        let forced = self.center.offset(ui, current, viewer.settings.animation.transition_secs, |index| {
            centered_scroll_offset(index, timeline.strip_marker_width, timeline.strip_padding, count, viewport)
        });

        let mut scroll = ScrollArea::horizontal()
            .id_source("timeline_strip")
            .drag_to_scroll(false)
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
        if let Some(offset) = forced {
            scroll = scroll.horizontal_scroll_offset(offset);
        }

        let markers = strip_markers(viewer.records, current, timeline);
        let output = scroll.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(timeline.strip_padding);
                for marker in &markers {
                    let response = marker_ui(ui, marker, timeline.strip_marker_width);
                    if response.clicked() {
                        // Direct jump, no threshold
                        navigation.set_index(marker.index as isize);
                    }
                    self.drag.handle(&response, navigation, GestureSurface::TimelineStrip);
                }
                ui.add_space(timeline.strip_padding);
            });
        });
        self.center.record(output.state.offset.x);
    }
}

fn marker_ui(ui: &mut Ui, marker: &StripMarker, width: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, MARKER_HEIGHT), Sense::click_and_drag());
    let painter = ui.painter();

    let line_y = rect.top() + 18.0;
    let center = Pos2::new(rect.center().x, line_y);
    let connector = Color32::from_black_alpha(51);

    if !marker.is_first {
        painter.line_segment([Pos2::new(rect.left(), line_y), center], Stroke::new(1.0, connector));
    }
    if !marker.is_last {
        painter.line_segment([center, Pos2::new(rect.right(), line_y)], Stroke::new(1.0, connector));
    }

    if marker.selected {
        painter.circle_filled(center, marker.dot_size / 2.0, Color32::BLACK);
        painter.circle_stroke(center, 9.0, Stroke::new(2.0, Color32::BLACK));
    } else {
        painter.circle_filled(center, marker.dot_size / 2.0, Color32::from_black_alpha(51));
    }

    let label_color = if marker.strong { theme::primary_text() } else { theme::secondary_text() };
    painter.text(
        Pos2::new(center.x, line_y + 22.0),
        Align2::CENTER_CENTER,
        marker.year.to_string(),
        FontId::monospace(marker.label_size),
        label_color,
    );

    response
}
