// src/gui/components/side_panel.rs
//
// Left panel: season picker, team and position multi-selects, chart toggles.
// Selection changes are applied directly to `app` and the view is rebuilt.

use eframe::egui;
use crate::{
    config::options::SeasonOptions,
    filter,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Season");

    let prev_year = app.state.options.season.year;
    let mut year = prev_year;
    let mut picked = false;
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("season_year")
            .selected_text(year.to_string())
            .show_ui(ui, |ui| {
                for y in SeasonOptions::selectable_years() {
                    picked |= ui.selectable_value(&mut year, y, y.to_string()).clicked();
                }
            });

        if app.season.is_none() && ui.button("Retry").clicked() {
            picked = true;
        }
    });

    if should_load(prev_year, year, picked, app.season.is_some()) && !app.running {
        logf!("UI: Season {} → {}", prev_year, year);
        app.state.options.season.year = year;
        actions::load_season(app);
    }

    ui.separator();
    positions(ui, app);

    ui.separator();
    charts(ui, app);

    ui.separator();
    teams(ui, app);
}

/// A different year always loads; the same year only when nothing is shown
/// (the last load failed), so picking it again retries.
fn should_load(prev_year: u32, year: u32, picked: bool, loaded: bool) -> bool {
    year != prev_year || (picked && !loaded)
}

fn apply_selection_change(app: &mut App) {
    app.rebuild_view();

    // Don't overwrite progress messages with selection info
    if !app.running {
        app.set_selection_message();
    }
}

fn positions(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Positions");

    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_positions = filter::all_positions().into_iter().collect();
            changed = true;
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_positions.clear();
            changed = true;
        }
    });

    ui.horizontal_wrapped(|ui| {
        for pos in filter::all_positions() {
            let sel = &mut app.state.gui.selected_positions;
            let is_selected = sel.contains(&pos);
            if ui.selectable_label(is_selected, pos.as_str()).clicked() {
                if is_selected { sel.remove(&pos); } else { sel.insert(pos); }
                changed = true;
            }
        }
    });

    if changed {
        apply_selection_change(app);
        logf!("UI: Positions → {:?}", app.state.gui.selected_positions);
    }
}

fn charts(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Charts");
    let charts = &mut app.state.options.charts;
    let mut toggled = false;
    if ui.checkbox(&mut charts.show_avg_points, "Average points by position").changed() {
        logf!("UI: show_avg_points → {}", charts.show_avg_points);
        toggled = true;
    }
    if ui.checkbox(&mut charts.show_age_histogram, "Age distribution").changed() {
        logf!("UI: show_age_histogram → {}", charts.show_age_histogram);
        toggled = true;
    }
    // Re-read the dataset if it was missing last time
    if toggled {
        app.chart_data.retry();
    }
}

fn teams(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");

    let mut changed = false;
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_teams = app.teams.iter().cloned().collect();
            changed = true;
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_teams.clear();
            changed = true;
        }
    });

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("teams_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for idx in 0..app.teams.len() {
                let team = &app.teams[idx];
                let is_selected = app.state.gui.selected_teams.contains(team);
                let resp = ui.selectable_label(is_selected, team.as_str());

                if resp.clicked() && !app.running {
                    let shift = ui.input(|i| i.modifiers.shift);
                    let sel = &mut app.state.gui.selected_teams;

                    match (shift, app.last_clicked_team) {
                        // Shift: add the whole range from the anchor
                        (true, Some(last)) => {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            for t in &app.teams[lo..=hi] {
                                sel.insert(t.clone());
                            }
                        }
                        // Plain click toggles one team
                        _ => {
                            if is_selected { sel.remove(team); } else { sel.insert(team.clone()); }
                        }
                    }
                    app.last_clicked_team = Some(idx);
                    changed = true;
                }
            }
        });

    if changed {
        apply_selection_change(app);
        logf!(
            "UI: Teams changed ({} of {})",
            app.state.gui.selected_teams.len(),
            app.teams.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::should_load;

    #[test]
    fn new_year_loads() {
        assert!(should_load(2021, 2020, true, true));
    }

    #[test]
    fn same_year_reloads_only_after_a_failure() {
        assert!(!should_load(2021, 2021, true, true));
        assert!(should_load(2021, 2021, true, false));
        assert!(!should_load(2021, 2021, false, false));
    }
}
