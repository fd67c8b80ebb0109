use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    style.visuals.window_fill = Color32::from_rgb(20, 22, 26);
    style.visuals.panel_fill = Color32::from_rgb(24, 26, 30);
    style.visuals.faint_bg_color = Color32::from_rgb(32, 34, 40);
    style.visuals.extreme_bg_color = Color32::from_rgb(14, 16, 20);
    style.visuals.override_text_color = Some(Color32::from_rgb(235, 235, 235));

    // Buttons
    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 52, 58);
    style.visuals.widgets.inactive.rounding = Rounding::same(4.0);
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(65, 68, 75);
    style.visuals.widgets.hovered.rounding = Rounding::same(4.0);
    style.visuals.widgets.active.bg_fill = ACCENT_BLUE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(4.0);

    style.visuals.selection.bg_fill = ACCENT_BLUE;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT_BLUE);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);

    ctx.set_style(style);
}

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(22, 119, 255);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
