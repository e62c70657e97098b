// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;
use tracing::info;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    data::OfferView,
    offer::JobOffer,
    scrape::Harvest,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last harvest, in aggregator order; replaced wholesale on refresh
    pub offers: Vec<JobOffer>,

    // rows of `offers` passing the current filter
    pub row_ix: Vec<usize>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // background harvest in flight
    pub pending: Option<Receiver<Harvest>>,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        info!("Init: tech={:?} sources={:?}", state.options.scrape.tech, state.options.scrape.sources);

        let mut app = Self {
            state,
            offers: Vec::new(),
            row_ix: Vec::new(),
            status: Arc::new(Mutex::new(String::from("Idle"))),
            running: false,
            pending: None,
        };

        // Same flow as the command line: scrape, dump CSV, show.
        actions::scrape(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Recompute `row_ix` from the filter text.
    pub fn rebuild_view(&mut self) {
        self.row_ix = OfferView::filter(&self.offers, &self.state.gui.filter).row_ix;
    }

    /// Current filtered view (borrowing).
    pub fn view(&self) -> OfferView<'_> {
        OfferView::filter(&self.offers, &self.state.gui.filter)
    }

    /// Install a finished harvest as the displayed data.
    pub fn apply_harvest(&mut self, harvest: Harvest) {
        let summary = harvest.summary();
        self.offers = harvest.offers;
        self.rebuild_view();
        self.status(format!("{} offer(s) | {}", self.offers.len(), summary));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::toolbar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
