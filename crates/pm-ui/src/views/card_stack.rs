//! Vertically swiped stack of record cards

use egui::{Align2, Color32, FontId, Id, Painter, Pos2, Rect, Rounding, Sense, Ui, Vec2};
use pm_core::navigation::GestureAxis;
use pm_core::presentation::{card_stack_layout, CardPresentation};
use pm_core::{GestureSurface, Record, ViewerContext};

use crate::widgets::{party_pill, portrait_placeholder, swipe_hint, DragTracker};
use crate::theme;

const CARD_MARGIN: f32 = 20.0;
const CARD_PADDING: f32 = 24.0;
const ACTION_ROW_HEIGHT: f32 = 40.0;

/// Card stack view state
#[derive(Debug, Default)]
pub struct CardStackView {
    drag: DragTracker,
}

impl CardStackView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the stack. Returns true when the user asked for the detail view.
    pub fn ui(&mut self, ui: &mut Ui, viewer: &ViewerContext) -> bool {
        let stack_size = ui.available_size() - Vec2::new(0.0, ACTION_ROW_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(stack_size.max(Vec2::ZERO), Sense::click_and_drag());
        let navigation = &viewer.navigation;
        self.drag.handle(&response, navigation, GestureSurface::CardStack);

        let context = navigation.get_context();
        let settings = &viewer.settings;
        let targets = card_stack_layout(
            viewer.records.len(),
            context.current_index,
            context.drag_offset(GestureSurface::CardStack),
            rect.height(),
            &settings.card_stack,
        );

        // Follow the finger directly while dragging, ease everywhere else
        let duration = if context.drag.is_some() { 0.0 } else { settings.animation.transition_secs };
        let animated: Vec<CardPresentation> =
            targets.iter().map(|target| animate(ui, target, duration)).collect();

        let painter = ui.painter_at(rect);
        let mut order: Vec<&CardPresentation> = animated.iter().filter(|c| c.is_visible()).collect();
        order.sort_by_key(|card| card.z_index);

        let card_size = Vec2::new(rect.width() - CARD_MARGIN * 2.0, rect.height() - 16.0);
        for card in order {
            let center = rect.center() + Vec2::new(0.0, card.offset);
            let card_rect = Rect::from_center_size(center, card_size * card.scale);
            let record = &viewer.records[card.index];
            paint_card(&painter, card_rect, record, card.opacity, card.index == context.current_index);
        }

        let mut wants_detail = response.double_clicked();

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(CARD_MARGIN);
                let enabled = context.drag.is_none();
                if ui.add_enabled(enabled, egui::Button::new("Details")).clicked() {
                    wants_detail = true;
                }
            });
        });

        if animated.iter().zip(&targets).any(|(a, t)| (a.offset - t.offset).abs() > 0.5) {
            ui.ctx().request_repaint();
        }

        wants_detail
    }
}

fn animate(ui: &Ui, target: &CardPresentation, duration: f32) -> CardPresentation {
    let ctx = ui.ctx();
    // One animation slot per card and field
    let id = |field: &str| Id::new("card_anim").with(target.index).with(field);
    CardPresentation {
        offset: ctx.animate_value_with_time(id("offset"), target.offset, duration),
        opacity: ctx
            .animate_value_with_time(id("opacity"), target.opacity, duration)
            .clamp(0.0, 1.0),
        scale: ctx.animate_value_with_time(id("scale"), target.scale, duration),
        ..*target
    }
}

fn paint_card(painter: &Painter, rect: Rect, record: &Record, opacity: f32, active: bool) {
    let rounding = Rounding::same(20.0);

    // Shadow, then the card body
    painter.rect_filled(
        rect.translate(Vec2::new(0.0, 10.0)).expand(4.0),
        rounding,
        Color32::from_black_alpha(20).linear_multiply(opacity),
    );
    painter.rect_filled(rect, rounding, Color32::WHITE.linear_multiply(opacity));

    let card_painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));

    let portrait_height = (rect.height() * 0.45).min(340.0);
    let portrait = Rect::from_min_size(rect.min, Vec2::new(rect.width(), portrait_height));
    portrait_placeholder(&card_painter, portrait, record, 1.0, opacity);

    // Ordinal overlaid on the bottom-left of the portrait
    card_painter.text(
        portrait.left_bottom() + Vec2::new(14.0, 0.0),
        Align2::LEFT_BOTTOM,
        record.ordinal_label(),
        FontId::proportional(portrait_height * 0.35),
        Color32::from_white_alpha(230).linear_multiply(opacity),
    );

    let wrap_width = rect.width() - CARD_PADDING * 2.0;
    let mut cursor = Pos2::new(rect.left() + CARD_PADDING, portrait.bottom() + CARD_PADDING);

    let name = card_painter.layout(
        record.name.to_string(),
        FontId::proportional(24.0),
        theme::primary_text().linear_multiply(opacity),
        wrap_width,
    );
    let name_height = name.size().y;
    card_painter.galley(cursor, name);
    cursor.y += name_height + 8.0;

    let pill = party_pill(&card_painter, cursor + Vec2::new(0.0, 10.0), record.party.label(), opacity);
    card_painter.text(
        Pos2::new(pill.right() + 12.0, pill.center().y),
        Align2::LEFT_CENTER,
        record.terms_summary,
        FontId::monospace(12.0),
        theme::secondary_text().linear_multiply(opacity),
    );
    cursor.y = pill.bottom() + 16.0;

    card_painter.line_segment(
        [cursor, Pos2::new(rect.right() - CARD_PADDING, cursor.y)],
        egui::Stroke::new(1.0, theme::hairline().linear_multiply(opacity)),
    );
    cursor.y += 16.0;

    let description = card_painter.layout(
        record.description.to_string(),
        FontId::proportional(14.0),
        theme::secondary_text().linear_multiply(opacity),
        wrap_width,
    );
    card_painter.galley(cursor, description);

    if active {
        swipe_hint(
            &card_painter,
            Pos2::new(rect.center().x, rect.bottom() - CARD_PADDING - 14.0),
            GestureAxis::Vertical,
            opacity,
        );
    }
}
