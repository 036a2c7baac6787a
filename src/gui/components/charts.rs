// src/gui/components/charts.rs
//
// Two small charts over the static dataset, drawn straight onto the painter:
// mean PTS per position (bars) and the age distribution (histogram + mean line).

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::{
    charts::{self, AgeHistogram},
    gui::app::App,
};

const CHART_H: f32 = 180.0;
const CHART_W: f32 = 420.0;
const PAD: f32 = 24.0;

const BAR_FILL: Color32 = Color32::from_rgb(29, 66, 138);
const HIST_FILL: Color32 = Color32::from_rgb(200, 16, 46);
const MEAN_LINE: Color32 = Color32::from_rgb(240, 180, 40);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let opts = &app.state.options.charts;
    if !opts.show_avg_points && !opts.show_age_histogram {
        return;
    }
    let (show_avg, show_hist, bins) = (opts.show_avg_points, opts.show_age_histogram, opts.bins);

    let path = app.state.options.charts.dataset_path.clone();
    app.chart_data.ensure_loaded(&path);
    if let Some(err) = app.chart_data.error() {
        ui.colored_label(ui.visuals().error_fg_color, err);
        ui.separator();
        return;
    }
    let Some(rows) = app.chart_data.rows() else { return };

    ui.horizontal(|ui| {
        if show_avg {
            ui.vertical(|ui| {
                ui.strong("Average points per game by position");
                avg_points(ui, &charts::avg_points_by_position(rows));
            });
        }
        if show_hist {
            ui.vertical(|ui| {
                let hist = charts::age_histogram(&charts::ages(rows), bins);
                match hist.mean {
                    Some(m) => ui.strong(format!("Age distribution (mean {m:.1})")),
                    None => ui.strong("Age distribution"),
                };
                age_histogram(ui, &hist);
            });
        }
    });
    ui.separator();
}

fn frame(ui: &mut egui::Ui) -> (egui::Painter, Rect) {
    let (resp, painter) = ui.allocate_painter(Vec2::new(CHART_W, CHART_H), Sense::hover());
    let outer = resp.rect;
    painter.rect_stroke(outer, 2.0, ui.visuals().widgets.noninteractive.bg_stroke, StrokeKind::Inside);
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + PAD, outer.top() + PAD * 0.5),
        Pos2::new(outer.right() - PAD * 0.5, outer.bottom() - PAD),
    );
    (painter, plot)
}

fn avg_points(ui: &mut egui::Ui, bars: &[(String, f64)]) {
    let text_color = ui.visuals().text_color();
    let (painter, plot) = frame(ui);
    if bars.is_empty() {
        painter.text(plot.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(12.0), text_color);
        return;
    }

    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(f64::EPSILON);
    let slot = plot.width() / bars.len() as f32;
    let bar_w = slot * 0.7;

    for (i, (pos, v)) in bars.iter().enumerate() {
        let h = (*v / max) as f32 * (plot.height() - 14.0);
        let x0 = plot.left() + slot * i as f32 + (slot - bar_w) * 0.5;
        let bar = Rect::from_min_max(Pos2::new(x0, plot.bottom() - h), Pos2::new(x0 + bar_w, plot.bottom()));
        painter.rect_filled(bar, 1.0, BAR_FILL);
        painter.text(
            Pos2::new(bar.center().x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{v:.1}"),
            FontId::proportional(11.0),
            text_color,
        );
        painter.text(
            Pos2::new(bar.center().x, plot.bottom() + 3.0),
            Align2::CENTER_TOP,
            pos,
            FontId::proportional(11.0),
            text_color,
        );
    }
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, text_color));
}

fn age_histogram(ui: &mut egui::Ui, hist: &AgeHistogram) {
    let text_color = ui.visuals().text_color();
    let (painter, plot) = frame(ui);
    let (Some(&lo), Some(&hi)) = (hist.edges.first(), hist.edges.last()) else {
        painter.text(plot.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(12.0), text_color);
        return;
    };

    let span = (hi - lo).max(f64::EPSILON);
    let x_of = |age: f64| plot.left() + ((age - lo) / span) as f32 * plot.width();
    let max = hist.max_count().max(1) as f32;

    for (i, &n) in hist.counts.iter().enumerate() {
        let h = n as f32 / max * (plot.height() - 4.0);
        let bar = Rect::from_min_max(
            Pos2::new(x_of(hist.edges[i]), plot.bottom() - h),
            Pos2::new(x_of(hist.edges[i + 1]), plot.bottom()),
        );
        painter.rect_filled(bar, 0.0, HIST_FILL);
        painter.rect_stroke(bar, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);
    }

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, text_color));
    for age in [lo, hi] {
        painter.text(
            Pos2::new(x_of(age), plot.bottom() + 3.0),
            Align2::CENTER_TOP,
            format!("{age:.0}"),
            FontId::proportional(11.0),
            text_color,
        );
    }

    if let Some(m) = hist.mean {
        let x = x_of(m);
        painter.line_segment(
            [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
            Stroke::new(2.0, MEAN_LINE),
        );
    }
}
