// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use pracus::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui, log,
};

fn main() {
    let _guard = log::init(log::Target::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        tracing::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
