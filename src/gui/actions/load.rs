// src/gui/actions/load.rs
use crate::gui::{app::App, progress::GuiProgress};

/// Load the season in `state.options.season.year` (cache first, then the web)
/// and reset the team selection to every team of that season.
/// Blocks the UI thread while fetching.
pub fn load_season(app: &mut App) {
    let year = app.state.options.season.year;
    logf!("Load: Begin year={}", year);

    app.running = true;
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the fetch happens ←
    let res = app.cache.get_or_load_with(year, Some(&mut prog));
    app.running = false;

    match res {
        Ok(season) => {
            let teams = match season.unique_teams() {
                Ok(t) => t,
                Err(e) => {
                    loge!("Load: Error year={}: {}", year, e);
                    app.status(format!("Error: {e}"));
                    return;
                }
            };

            logf!("Load: OK year={} rows={} teams={}", year, season.nrows(), teams.len());

            app.numeric_cols = season.numeric_columns();
            app.state.gui.selected_teams = teams.iter().cloned().collect();
            app.teams = teams;
            app.last_clicked_team = None;
            app.season = Some(season);

            app.rebuild_view();
            app.set_selection_message();
        }
        Err(e) => {
            loge!("Load: Error year={}: {}", year, e);
            app.season = None;
            app.teams.clear();
            app.numeric_cols.clear();
            app.state.gui.selected_teams.clear();
            app.rebuild_view();
            app.status(format!("Error: {e}"));
        }
    }
}
