// src/gui/actions/scrape.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    gui::{app::App, progress::GuiProgress},
    progress::Progress,
    scrape::{Aggregator, Harvest},
};

/// Start a harvest on a worker thread. The UI keeps drawing; `poll` picks
/// the result up on a later frame.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    app.running = true;

    let opts = app.state.options.scrape.clone();
    info!("Scrape: Begin tech={:?} sources={:?}", opts.tech, opts.sources);

    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel::<Harvest>();
    app.pending = Some(rx);

    thread::spawn(move || {
        let harvest = match Aggregator::from_options(&opts) {
            Ok(agg) => agg.harvest(Some(&mut prog as &mut dyn Progress)),
            Err(e) => {
                error!("Scrape: setup failed: {e}");
                prog.log(&format!("Error: {e}"));
                Harvest::default()
            }
        };
        let _ = tx.send(harvest);
        ctx.request_repaint();
    });
}

/// Collect a finished harvest, if any: display it and dump the CSV.
pub fn poll(app: &mut App) {
    let Some(rx) = &app.pending else { return };

    match rx.try_recv() {
        Ok(harvest) => {
            app.pending = None;
            app.running = false;

            info!("Scrape: OK offers={} ({})", harvest.offers.len(), harvest.summary());
            app.apply_harvest(harvest);

            if app.state.options.export.enabled {
                super::export(app);
            }
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            // worker died without sending; keep whatever we had
            error!("Scrape: worker ended without a result");
            app.pending = None;
            app.running = false;
            app.status("Error: scrape worker stopped");
        }
    }
}
