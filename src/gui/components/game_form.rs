use egui::{RichText, TextEdit};

use crate::games::FormField;
use crate::gui::styles;
use crate::manager::FormState;

pub struct GameFormWindow;

impl GameFormWindow {
    /// Draw the modal for `form`. Closing the window counts as Cancel; both
    /// are inert while a save is in flight.
    pub fn show(ctx: &egui::Context, form: &mut FormState) -> Option<FormAction> {
        let mut action = None;
        let mut open = true;

        egui::Window::new(form.title())
            .id(egui::Id::new("game_form_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(360.0);

                for field in FormField::ALL {
                    ui.label(field.label());

                    let locked = field == FormField::AppId && form.app_id_locked();
                    let enabled = !locked && !form.saving;
                    let hint = match field {
                        FormField::ReleaseDate => "YYYY-MM-DD",
                        FormField::Price => "0.00",
                        _ => "",
                    };
                    let edit = TextEdit::singleline(form.values.value_mut(field))
                        .hint_text(hint)
                        .desired_width(f32::INFINITY);
                    ui.add_enabled(enabled, edit);

                    if let Some(message) = form.error_for(field) {
                        ui.label(RichText::new(message).size(12.0).color(styles::ERROR_RED));
                    }
                    ui.add_space(6.0);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!form.saving, |ui| {
                        let ok_label = if form.saving { "Saving..." } else { "OK" };
                        if ui.button(ok_label).clicked() {
                            action = Some(FormAction::Save);
                        }
                        if ui.button("Cancel").clicked() {
                            action = Some(FormAction::Cancel);
                        }
                    });
                });
            });

        if !open && !form.saving {
            action = Some(FormAction::Cancel);
        }

        action
    }
}

pub enum FormAction {
    Save,
    Cancel,
}
