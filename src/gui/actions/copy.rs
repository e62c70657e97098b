// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{csv, gui::app::App};

/// Filtered rows as CSV (with header) to the clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let rows = app.view().to_owned_rows();

    if rows.is_empty() {
        app.status("Nothing to copy");
        debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    match csv::to_csv_string(&rows) {
        Ok(txt) => {
            info!("Copy: rows={}", rows.len());
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} row(s) to clipboard", rows.len()));
        }
        Err(e) => {
            error!("Copy: Error: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
