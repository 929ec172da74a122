use egui::{RichText, Ui};
use pm_core::{ContentMode, ViewerContext};

use crate::{icons, theme};

/// Title block with the card stack / timeline toggle
pub fn header_ui(ui: &mut Ui, viewer: &ViewerContext) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.add_space(24.0);
        ui.vertical(|ui| {
            ui.label(
                RichText::new("PRIME MINISTERS")
                    .monospace()
                    .size(11.0)
                    .color(theme::secondary_text()),
            );
            ui.label(RichText::new("of Canada").size(28.0).color(theme::primary_text()));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(24.0);
            let (icon, hover) = match viewer.navigation.mode() {
                ContentMode::CardStack => (icons::TIMELINE, "Show timeline (T)"),
                ContentMode::TimelineBrowser => (icons::STACK, "Show cards (T)"),
            };
            let button = egui::Button::new(RichText::new(icon).size(20.0))
                .min_size(egui::vec2(44.0, 44.0));
            if ui.add(button).on_hover_text(hover).clicked() {
                viewer.navigation.toggle_mode();
            }
        });
    });
    ui.add_space(8.0);
}
