use egui::{Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::games::{AppId, GameRecord};
use crate::gui::styles;

const COLUMN_TITLES: [&str; 7] = [
    "App ID",
    "Name",
    "Release Date",
    "Price",
    "Developers",
    "Publishers",
    "Actions",
];

const ROW_HEIGHT: f32 = 30.0;

pub struct GamesTable;

impl GamesTable {
    pub fn show(ui: &mut egui::Ui, games: &[GameRecord]) -> Option<TableAction> {
        if games.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.label(RichText::new("No games found").size(18.0).color(Color32::GRAY));
                ui.label(
                    RichText::new("The collection is empty or not yet loaded")
                        .color(Color32::GRAY),
                );
            });
            return None;
        }

        let mut action = None;

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(70.0))
            .column(Column::initial(200.0).at_least(100.0).clip(true))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(60.0))
            .columns(Column::initial(160.0).at_least(80.0).clip(true), 2)
            .column(Column::remainder().at_least(130.0))
            .header(26.0, |mut header| {
                for title in COLUMN_TITLES {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for game in games {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(game.app_id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&game.name);
                        });
                        row.col(|ui| {
                            ui.label(&game.release_date);
                        });
                        row.col(|ui| {
                            ui.label(game.price.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&game.developers);
                        });
                        row.col(|ui| {
                            ui.label(&game.publishers);
                        });
                        row.col(|ui| {
                            if ui.button("Edit").clicked() {
                                action = Some(TableAction::Edit(game.clone()));
                            }
                            let delete_button =
                                egui::Button::new(RichText::new("Delete").color(styles::ERROR_RED));
                            if ui.add(delete_button).clicked() {
                                action = Some(TableAction::Delete(game.app_id.clone()));
                            }
                        });
                    });
                }
            });

        action
    }
}

pub enum TableAction {
    Edit(GameRecord),
    Delete(AppId),
}
