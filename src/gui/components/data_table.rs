// src/gui/components/data_table.rs
//
// Read-only view over the filtered rows. Link cells open in the browser.
// No rows still draws the header.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::COLUMN_NAMES, gui::app::App};

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

// Title, Company, Location, Link, Source
const WIDTHS: [f32; 5] = [320.0, 180.0, 150.0, 110.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for (i, w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(*w).at_least(40.0).clip(true);
        // last column soaks up the remaining width
        table = table.column(if i + 1 == WIDTHS.len() { col.resizable(false) } else { col.resizable(true) });
    }

    table
        .header(HEADER_H, |mut header| {
            for name in COLUMN_NAMES {
                header.col(|ui| {
                    ui.label(RichText::new(name).strong());
                });
            }
        })
        .body(|body| {
            let offers = &app.offers;
            let row_ix = &app.row_ix;
            body.rows(ROW_H, row_ix.len(), |mut row| {
                let Some(offer) = row_ix.get(row.index()).and_then(|&i| offers.get(i)) else {
                    return;
                };
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(offer.title()).on_hover_text(offer.title());
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(offer.company());
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(offer.location());
                });
                row.col(|ui| {
                    ui.hyperlink_to("visit website", offer.link())
                        .on_hover_text(offer.link());
                });
                row.col(|ui| {
                    ui.label(offer.source().label());
                });
            });
        });
}
