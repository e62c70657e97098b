// src/gui/actions/export.rs
use tracing::{error, info};

use crate::{file, gui::app::App};

/// Rewrite the CSV dump with every harvested offer (the filter only affects
/// the table and the clipboard).
pub fn export(app: &mut App) {
    let path = app.state.options.export.path.clone();

    match file::export_offers(&path, &app.offers) {
        Ok(p) => {
            info!("Export: OK rows={} → {}", app.offers.len(), p.display());
            let prev = app.status_text();
            app.status(format!("{prev} · saved {}", p.display()));
        }
        Err(e) => {
            error!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}
