// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write the filtered table to the output path. An empty selection still
/// exports a header-only file: it is exactly what is on screen.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    let Some(table) = app.filtered_table() else {
        logd!("Export: Clicked, but there's no season loaded");
        app.status("Nothing to export (no season loaded)");
        return;
    };

    logf!(
        "Export: Begin year={}, rows={}, format={:?}",
        table.year,
        table.nrows(),
        app.state.options.export.format
    );

    let status_msg = match file::write_export(&app.state.options.export, &table) {
        Ok(path) => format!("Exported {} row(s) → {}", table.nrows(), path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
