// src/gui/components/search_bar.rs
use eframe::egui::{self, TextEdit};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            TextEdit::singleline(&mut app.state.gui.filter)
                .hint_text("title, company, location…")
                .desired_width(280.0),
        );
        if resp.changed() {
            app.rebuild_view();
        }

        if !app.state.gui.filter.is_empty() && ui.small_button("Clear").clicked() {
            app.state.gui.filter.clear();
            app.rebuild_view();
        }

        ui.label(format!("{} / {}", app.row_ix.len(), app.offers.len()));
    });
}
