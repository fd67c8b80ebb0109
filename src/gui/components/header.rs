use egui::RichText;

use crate::gui::styles;

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui, node: &str, busy: bool) -> Option<HeaderAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("Games")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                RichText::new(format!("node: {}", node))
                    .size(13.0)
                    .color(styles::TEXT_SECONDARY),
            );

            if busy {
                ui.spinner();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let add_button = egui::Button::new(
                    RichText::new("Add Game").strong().color(egui::Color32::WHITE),
                )
                .fill(styles::ACCENT_BLUE);

                if ui.add(add_button).clicked() {
                    action = Some(HeaderAction::Add);
                }
                if ui.button("Refresh").clicked() {
                    action = Some(HeaderAction::Refresh);
                }
            });
        });

        action
    }
}

pub enum HeaderAction {
    Add,
    Refresh,
}
