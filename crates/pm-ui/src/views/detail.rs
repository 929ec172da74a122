//! Modal detail overlay

use egui::{Color32, Context, Id, Order, Pos2, RichText, ScrollArea, Sense, Ui, Vec2};
use pm_core::{DetailOutcome, DetailView, Record, ViewerContext};

use crate::{icons, theme};

/// Year used for the age of living office-holders
const AGE_REFERENCE_YEAR: i32 = 2025;

/// Holds the open detail overlay, if any
#[derive(Debug, Default)]
pub struct DetailPanel {
    open: Option<DetailView>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on the record at the current index, replacing any open overlay
    pub fn open(&mut self, viewer: &ViewerContext) {
        self.open = viewer.open_detail();
    }

    pub fn close(&mut self) {
        if let Some(detail) = self.open.take() {
            tracing::info!("Closed detail for #{}", detail.record().number);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Record shown by the open overlay
    pub fn record(&self) -> Option<&'static Record> {
        self.open.as_ref().map(DetailView::record)
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(detail) = self.open.as_mut() else {
            return;
        };

        let mut close = false;
        let screen = ctx.screen_rect();
        let origin = screen.min + Vec2::new(detail.dismiss_offset(), 0.0);

        egui::Area::new(Id::new("detail_overlay"))
            .order(Order::Foreground)
            .fixed_pos(origin)
            .show(ctx, |ui| {
                let rect = egui::Rect::from_min_size(origin, screen.size());
                let response = ui.allocate_rect(rect, Sense::drag());
                ui.painter().rect_filled(rect, 0.0, Color32::WHITE);

                if response.drag_started() {
                    detail.begin_dismiss();
                }
                if response.dragged() {
                    let translation = detail.dismiss_offset() + response.drag_delta().x;
                    detail.update_dismiss(translation);
                }
                if response.drag_released() {
                    let translation = detail.dismiss_offset();
                    close |= detail.end_dismiss(translation) == DetailOutcome::Dismissed;
                }

                let close_rect = egui::Rect::from_min_size(
                    Pos2::new(rect.right() - 68.0, rect.top() + 16.0),
                    Vec2::splat(44.0),
                );
                if ui.put(close_rect, egui::Button::new(RichText::new(icons::CLOSE).size(18.0))).clicked() {
                    close = true;
                }

                ui.allocate_ui_at_rect(rect.shrink2(Vec2::new(24.0, 72.0)), |ui| {
                    ScrollArea::vertical().show(ui, |ui| detail_body(ui, detail.record()));
                });
            });

        if close {
            self.close();
        }
    }
}

fn detail_body(ui: &mut Ui, record: &Record) {
    ui.label(
        RichText::new(format!("{}  ·  {}", record.ordinal_label(), record.image_key()))
            .monospace()
            .size(11.0)
            .color(theme::secondary_text()),
    );
    ui.label(RichText::new(record.name).size(28.0).color(theme::primary_text()));
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(record.party.label().to_uppercase()).monospace().size(10.0).strong());
        ui.label(RichText::new(record.term_string()).monospace().size(12.0).color(theme::secondary_text()));
    });
    ui.label(RichText::new(record.terms_summary).monospace().size(12.0).color(theme::secondary_text()));

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);

    ui.label(RichText::new(record.description).size(14.0).color(theme::secondary_text()));
    ui.add_space(16.0);

    egui::Grid::new("detail_facts").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
        if let Some(born) = record.born_label() {
            fact_row(ui, "BORN", &born);
        }
        fact_row(ui, "DIED", &record.died_label());
        if let Some(age) = record.age_label(AGE_REFERENCE_YEAR) {
            fact_row(ui, "AGE", &age);
        }
        fact_row(ui, "IN OFFICE", &record.term_string());
    });

    bullet_section(ui, "KEY ACHIEVEMENTS", record.key_achievements);
    bullet_section(ui, "NOTABLE FACTS", record.notable_facts);

    ui.add_space(24.0);
    ui.label(
        RichText::new(format!("{} SWIPE RIGHT TO CLOSE", icons::RIGHT))
            .monospace()
            .size(9.0)
            .color(Color32::GRAY.linear_multiply(0.5)),
    );
}

fn fact_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).monospace().size(10.0).color(theme::secondary_text()));
    ui.label(value);
    ui.end_row();
}

fn bullet_section(ui: &mut Ui, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    ui.add_space(16.0);
    ui.label(RichText::new(title).monospace().size(10.0).color(theme::secondary_text()));
    for item in items {
        ui.label(format!("•  {}", item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_snapshots_current_record() {
        let viewer = ViewerContext::default();
        let mut panel = DetailPanel::new();
        assert!(!panel.is_open());

        viewer.navigation.set_index(5);
        panel.open(&viewer);
        viewer.navigation.advance();

        assert_eq!(panel.record().map(|r| r.number), Some(6));
        assert_eq!(viewer.navigation.current_index(), 6);

        panel.close();
        assert!(!panel.is_open());
        assert_eq!(viewer.navigation.current_index(), 6);
    }
}
