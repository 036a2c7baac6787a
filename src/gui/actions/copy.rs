// src/gui/actions/copy.rs
use eframe::egui;
use crate::{export, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.filtered_table() else {
        app.status("Nothing to copy (no season loaded)");
        logd!("Copy: Clicked, but there's no season loaded");
        return;
    };

    if table.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let fmt = app.state.options.export.format;
    match export::to_export_string(&table, fmt) {
        Ok(txt) => {
            logf!("Copy: rows={}, cols={}, format={:?}", table.nrows(), table.ncols(), fmt);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
