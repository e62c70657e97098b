// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{offer::Source, progress::Progress};

/// Mirrors harvest progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Fetching {} site(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, source: Source, offers: usize) {
        self.done += 1;
        self.set_status(format!(
            "{} → {} offer(s) ({}/{})",
            source, offers, self.done + self.failed, self.total
        ));
    }
    fn item_failed(&mut self, source: Source, _reason: &str) {
        self.failed += 1;
        self.set_status(format!(
            "{} failed ({}/{})",
            source, self.done + self.failed, self.total
        ));
    }
    fn finish(&mut self) {
        self.set_status(format!("Fetch complete ({} ok, {} failed)", self.done, self.failed));
    }
}
