//! Full-width timeline browser with an inline detail panel

use egui::{Align2, FontId, Pos2, Response, RichText, Rounding, ScrollArea, Sense, Stroke, Ui, Vec2};
use pm_core::navigation::GestureAxis;
use pm_core::presentation::{browser_cards, centered_scroll_offset, BrowserCard};
use pm_core::{records, GestureSurface, Record, ViewerContext};

use crate::theme;
use crate::widgets::{party_pill, round_portrait, swipe_hint, AutoCenter, DragTracker};

const CARD_HEIGHT: f32 = 150.0;

/// Timeline browser view state
pub struct TimelineBrowserView {
    center: AutoCenter,
    drag: DragTracker,
}

impl TimelineBrowserView {
    /// Create the browser and subscribe it to index and mode changes
    pub fn new(viewer: &ViewerContext) -> Self {
        Self {
            center: AutoCenter::new(&viewer.navigation),
            drag: DragTracker::default(),
        }
    }

    /// Draw the browser. Returns true when the user asked for the detail view.
    pub fn ui(&mut self, ui: &mut Ui, viewer: &ViewerContext) -> bool {
        let navigation = &viewer.navigation;
        let timeline = &viewer.settings.timeline;
        let current = navigation.current_index();
        let count = viewer.records.len();

        span_header(ui);

        let viewport = ui.available_width();
        let forced = self.center.offset(ui, current, viewer.settings.animation.transition_secs, |index| {
            centered_scroll_offset(index, timeline.browser_card_width, timeline.browser_padding, count, viewport)
        });

        let mut scroll = ScrollArea::horizontal()
            .id_source("timeline_browser")
            .drag_to_scroll(false)
            .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
        if let Some(offset) = forced {
            scroll = scroll.horizontal_scroll_offset(offset);
        }

        let cards = browser_cards(viewer.records, current, timeline);
        let output = scroll.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(timeline.browser_padding);
                for card in &cards {
                    let record = &viewer.records[card.index];
                    let response = card_ui(ui, card, record, timeline.browser_card_width);
                    if response.clicked() {
                        navigation.set_index(card.index as isize);
                    }
                    self.drag.handle(&response, navigation, GestureSurface::TimelineBrowser);
                }
                ui.add_space(timeline.browser_padding);
            });
        });
        self.center.record(output.state.offset.x);

        let mut wants_detail = false;
        if let Some(record) = viewer.records.get(current) {
            ui.add_space(8.0);
            wants_detail = inline_detail(ui, record);
        }

        let hint_y = ui.max_rect().bottom() - 16.0;
        swipe_hint(ui.painter(), Pos2::new(ui.max_rect().center().x, hint_y), GestureAxis::Horizontal, 1.0);

        wants_detail
    }
}

fn span_header(ui: &mut Ui) {
    let (first, last) = records::span();
    ui.horizontal(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(first.to_string()).monospace().color(theme::secondary_text()));
        let line_width = (ui.available_width() - 24.0 - 48.0).max(0.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(line_width, 12.0), Sense::hover());
        ui.painter().hline(rect.x_range(), rect.center().y, Stroke::new(1.0, egui::Color32::from_black_alpha(51)));
        ui.label(RichText::new(last.to_string()).monospace().color(theme::secondary_text()));
    });
    ui.add_space(12.0);
}

fn card_ui(ui: &mut Ui, card: &BrowserCard, record: &Record, width: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, CARD_HEIGHT), Sense::click_and_drag());
    let painter = ui.painter();
    let (text_color, connector) = if card.selected {
        (theme::primary_text(), egui::Color32::BLACK)
    } else {
        (theme::secondary_text(), egui::Color32::GRAY.linear_multiply(0.3))
    };

    let mut y = rect.top() + 16.0;
    painter.text(Pos2::new(rect.center().x, y), Align2::CENTER_TOP, card.year.to_string(), FontId::monospace(10.0), text_color);
    y += 20.0;
    painter.vline(rect.center().x, y..=y + 20.0, Stroke::new(1.0, connector));
    y += 20.0 + card.photo_size / 2.0;

    round_portrait(painter, Pos2::new(rect.center().x, y), card.photo_size, record, card.selected);
    y += card.photo_size / 2.0 + 8.0;

    painter.text(
        Pos2::new(rect.center().x, y),
        Align2::CENTER_TOP,
        record.ordinal_label(),
        FontId::monospace(11.0),
        text_color,
    );

    response
}

/// Selected record under the browser; returns true if "More" was clicked
fn inline_detail(ui: &mut Ui, record: &Record) -> bool {
    let mut more = false;
    let frame = egui::Frame::none()
        .fill(egui::Color32::from_black_alpha(5))
        .rounding(Rounding::same(16.0))
        .inner_margin(egui::Margin::symmetric(20.0, 24.0))
        .outer_margin(egui::Margin::symmetric(20.0, 0.0));

    frame.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(record.name).size(22.0).color(theme::primary_text()));
            ui.add_space(8.0);

            let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 24.0), Sense::hover());
            let pill = party_pill(ui.painter(), Pos2::new(rect.center().x - 110.0, rect.center().y), record.party.label(), 1.0);
            ui.painter().text(
                Pos2::new(pill.right() + 12.0, pill.center().y),
                Align2::LEFT_CENTER,
                record.terms_summary,
                FontId::monospace(11.0),
                theme::secondary_text(),
            );

            ui.add_space(16.0);
            ui.label(RichText::new(record.description).size(14.0).color(theme::secondary_text()));
            ui.add_space(12.0);
            if ui.button("More").clicked() {
                more = true;
            }
        });
    });

    more
}
