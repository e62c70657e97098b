// src/gui/components/toolbar.rs
use eframe::egui::{self, Button, Spinner};

use crate::{gui::{actions, app::App}, offer::Technology};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        // Technology switch: a new pick refetches everything.
        let before = app.state.options.scrape.tech;
        for tech in Technology::ALL {
            ui.add_enabled_ui(!app.running, |ui| {
                ui.selectable_value(&mut app.state.options.scrape.tech, tech, tech.label());
            });
        }
        if app.state.options.scrape.tech != before {
            actions::scrape(app, ui.ctx());
        }

        ui.separator();

        if ui.add_enabled(!app.running, Button::new("Refresh")).clicked() {
            actions::scrape(app, ui.ctx());
        }

        let has_rows = !app.offers.is_empty();
        if ui
            .add_enabled(!app.running && has_rows, Button::new("Export CSV"))
            .on_hover_text(app.state.options.export.path.display().to_string())
            .clicked()
        {
            actions::export(app);
        }
        if ui
            .add_enabled(!app.running && has_rows, Button::new("Copy"))
            .on_hover_text("Copy the visible rows as CSV")
            .clicked()
        {
            actions::copy(app, ui.ctx());
        }

        ui.separator();

        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
}
