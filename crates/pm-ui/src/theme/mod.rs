use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Apply the light, print-like application theme
pub fn apply_theme(ctx: &Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    let bg_color = Color32::WHITE;
    let widget_bg = Color32::from_black_alpha(13);
    let hover_color = Color32::from_black_alpha(25);
    let text_color = primary_text();

    visuals.window_fill = bg_color;
    visuals.panel_fill = bg_color;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = Color32::from_black_alpha(5);

    visuals.widgets.noninteractive.bg_fill = bg_color;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, hairline());
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.weak_bg_fill = widget_bg;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.inactive.rounding = Rounding::same(22.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.weak_bg_fill = hover_color;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.hovered.rounding = Rounding::same(22.0);

    visuals.widgets.active.bg_fill = Color32::from_black_alpha(40);
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, text_color);
    visuals.widgets.active.rounding = Rounding::same(22.0);

    visuals.selection.bg_fill = Color32::from_black_alpha(30);
    visuals.selection.stroke = Stroke::new(1.0, text_color);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(10.0, FontFamily::Monospace));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

pub fn primary_text() -> Color32 {
    Color32::BLACK
}

pub fn secondary_text() -> Color32 {
    Color32::GRAY
}

/// Thin separators and timeline connectors
pub fn hairline() -> Color32 {
    Color32::from_black_alpha(26)
}

pub fn portrait_fill() -> Color32 {
    Color32::from_gray(200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_is_light() {
        let ctx = Context::default();
        apply_theme(&ctx);
        let style = ctx.style();
        assert!(!style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, Color32::WHITE);
        assert_eq!(style.text_styles[&TextStyle::Heading].size, 28.0);
    }
}
