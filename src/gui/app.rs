use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::api::GamesClient;
use crate::manager::{GameRecordManager, Outcome, Request};

use super::components::{
    FormAction, GameFormWindow, GamesTable, Header, HeaderAction, StatusBar, TableAction,
};
use super::styles;

pub struct GamesApp {
    client: GamesClient,
    manager: GameRecordManager,
    in_flight: Vec<Promise<Outcome>>,
}

impl GamesApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: GamesClient) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);

        let mut app = Self {
            client,
            manager: GameRecordManager::new(),
            in_flight: Vec::new(),
        };

        if let Some(request) = app.manager.mount() {
            app.dispatch(request);
        }

        app
    }

    /// Run `request` on the tokio runtime; the result is picked up in `poll`.
    fn dispatch(&mut self, request: Request) {
        log::debug!("Dispatching {:?}", request);
        let client = self.client.clone();
        self.in_flight
            .push(Promise::spawn_async(async move { request.execute(&client).await }));
    }

    fn poll(&mut self) {
        let mut pending = Vec::with_capacity(self.in_flight.len());
        let mut follow_ups = Vec::new();

        for promise in self.in_flight.drain(..) {
            match promise.try_take() {
                Ok(outcome) => follow_ups.extend(self.manager.complete(outcome)),
                Err(promise) => pending.push(promise),
            }
        }

        self.in_flight = pending;
        for request in follow_ups {
            self.dispatch(request);
        }
    }
}

impl eframe::App for GamesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            match Header::show(ui, self.client.node(), !self.in_flight.is_empty()) {
                Some(HeaderAction::Add) => self.manager.begin_create(),
                Some(HeaderAction::Refresh) => {
                    let request = self.manager.list();
                    self.dispatch(request);
                }
                None => {}
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let mut clear = false;
            StatusBar::show(ui, self.manager.status().unwrap_or_default(), &mut clear);
            if clear {
                self.manager.clear_status();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match GamesTable::show(ui, self.manager.games()) {
                Some(TableAction::Edit(record)) => self.manager.begin_edit(&record),
                Some(TableAction::Delete(app_id)) => {
                    let request = self.manager.delete(&app_id);
                    self.dispatch(request);
                }
                None => {}
            }
        });

        if let Some(form) = self.manager.form_mut() {
            match GameFormWindow::show(ctx, form) {
                Some(FormAction::Save) => {
                    if let Some(request) = self.manager.save() {
                        self.dispatch(request);
                    }
                }
                Some(FormAction::Cancel) => self.manager.dismiss(),
                None => {}
            }
        }

        if !self.in_flight.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
