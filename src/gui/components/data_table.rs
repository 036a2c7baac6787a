// src/gui/components/data_table.rs
//
// Draws the live table: current season, filtered rows only.
// Purely a view; reads App, never mutates it.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{config::consts::COL_PLAYER, gui::app::App};

const PLAYER_W: f32 = 170.0;
const TEXT_W: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(season) = app.season.as_ref() else {
        ui.label("No season loaded.");
        return;
    };

    let cols = season.ncols();
    let player_ci = season.column_index(COL_PLAYER);
    let numeric = |ci: usize| app.numeric_cols.get(ci).copied().unwrap_or(false);

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("season_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("season_table", season.year));

            for ci in 0..cols {
                let w = if Some(ci) == player_ci { PLAYER_W } else { TEXT_W };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, label) in season.headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = RichText::new(label).strong();
                            if numeric(ci) {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.row_ix.len(), |mut row| {
                        let Some(data) = app.row_ix.get(row.index()).and_then(|&ix| season.rows.get(ix)) else {
                            return;
                        };
                        for (ci, cell) in data.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if numeric(ci) {
                                    ui.centered_and_justified(|ui| { ui.label(cell); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                                }
                            });
                        }
                    });
                });
        });
}
