// src/config/state.rs
use std::collections::BTreeSet;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Team codes ticked in the side panel
    pub selected_teams: BTreeSet<String>,

    /// Positions ticked in the side panel
    pub selected_positions: BTreeSet<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_teams: BTreeSet::new(),
            selected_positions: BTreeSet::new(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
