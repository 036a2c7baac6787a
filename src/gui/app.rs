// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    charts::ChartDataset,
    config::state::AppState,
    filter::{self, FilterSelection},
    season::SeasonCache,
    table::SeasonTable,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "NBA Player Stats",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // year → season, lives as long as the window
    pub cache: SeasonCache,

    // season currently shown, plus what the side panel offers for it
    pub season: Option<Arc<SeasonTable>>,
    pub teams: Vec<String>,
    pub last_clicked_team: Option<usize>,

    // filtered view: indexes into season.rows
    pub row_ix: Vec<usize>,
    pub numeric_cols: Vec<bool>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // static dataset for the charts, read on first use
    pub chart_data: ChartDataset,

    pub header_image: Option<egui::TextureHandle>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let header_image = super::components::header::load_texture(&cc.egui_ctx);

        let mut app = Self {
            state,
            cache: SeasonCache::default(),
            season: None,
            teams: Vec::new(),
            last_clicked_team: None,
            row_ix: Vec::new(),
            numeric_cols: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            chart_data: ChartDataset::default(),
            header_image,
        };

        // Default selection: all five positions
        app.state.gui.selected_positions = filter::all_positions().into_iter().collect();

        logf!("Init: default season={}", app.state.options.season.year);
        super::actions::load_season(&mut app);
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

    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            teams: self.state.gui.selected_teams.clone(),
            positions: self.state.gui.selected_positions.clone(),
        }
    }

    #[inline]
    pub fn set_selection_message(&self) {
        self.status(format!(
            "Selection: {} team(s), {} position(s), {} row(s)",
            self.state.gui.selected_teams.len(),
            self.state.gui.selected_positions.len(),
            self.row_ix.len()
        ));
    }

    /// Re-run the membership filter over the current season.
    pub fn rebuild_view(&mut self) {
        let Some(season) = self.season.as_ref() else {
            self.row_ix.clear();
            return;
        };

        match filter::filter_indices(season, &self.selection()) {
            Ok(ix) => {
                logd!("View: rows {} of {}", ix.len(), season.nrows());
                self.row_ix = ix;
            }
            Err(e) => {
                loge!("View: filter failed: {}", e);
                self.row_ix.clear();
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Filtered rows as an owned table (Copy/Export boundary).
    pub fn filtered_table(&self) -> Option<SeasonTable> {
        self.season.as_ref().map(|s| s.project_rows(&self.row_ix))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::side_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::header::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::charts::draw(ui, self);

            super::components::data_table::draw(ui, self);
        });
    }
}
