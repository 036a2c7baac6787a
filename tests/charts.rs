// tests/charts.rs
use std::fs;

use nba_stats::charts::{self, ChartDataset, ChartRow};

fn row(pos: &str, pts: f64, age: f64) -> ChartRow {
    ChartRow { pos: pos.to_string(), pts, age }
}

#[test]
fn average_points_per_position() {
    let rows = vec![row("PG", 10.0, 25.0), row("C", 30.0, 30.0), row("PG", 20.0, 22.0)];
    assert_eq!(
        charts::avg_points_by_position(&rows),
        vec![("C".to_string(), 30.0), ("PG".to_string(), 15.0)]
    );
}

#[test]
fn combined_positions_get_their_own_bar() {
    let rows = vec![row("PF", 8.0, 25.0), row("PF-C", 4.0, 25.0)];
    let got: Vec<String> = charts::avg_points_by_position(&rows).into_iter().map(|(p, _)| p).collect();
    assert_eq!(got, vec!["PF", "PF-C"]);
}

#[test]
fn no_rows_no_bars() {
    assert!(charts::avg_points_by_position(&[]).is_empty());
}

#[test]
fn histogram_mean() {
    let h = charts::age_histogram(&[20.0, 22.0, 24.0], 10);
    assert_eq!(h.mean, Some(22.0));
}

#[test]
fn histogram_bins_cover_min_to_max() {
    let ages = [20.0, 21.0, 22.0, 23.0, 24.0];
    let h = charts::age_histogram(&ages, 4);

    assert_eq!(h.edges, vec![20.0, 21.0, 22.0, 23.0, 24.0]);
    // right edge is inclusive for the last bin only
    assert_eq!(h.counts, vec![1, 1, 1, 2]);
    assert_eq!(h.counts.iter().sum::<usize>(), ages.len());
    assert_eq!(h.max_count(), 2);
}

#[test]
fn histogram_with_a_single_distinct_age() {
    let h = charts::age_histogram(&[27.0, 27.0, 27.0], 2);
    assert_eq!(h.edges, vec![26.5, 27.0, 27.5]);
    assert_eq!(h.counts, vec![0, 3]);
}

#[test]
fn empty_histogram() {
    let h = charts::age_histogram(&[], 10);
    assert!(h.counts.is_empty());
    assert!(h.edges.is_empty());
    assert_eq!(h.mean, None);
    assert_eq!(h.max_count(), 0);
}

#[test]
fn reads_the_needed_columns_from_the_dataset() {
    let mut path = std::env::temp_dir();
    path.push("nba_stats_charts_dataset.csv");
    fs::write(
        &path,
        "Player,Pos,Age,Tm,PTS\nA,PG,24,BOS,10\nB,C,30,LAL,30\n\"Smith, Jr.\",PG,20,DAL,20\n",
    )
    .unwrap();

    let rows = charts::load_chart_rows(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], row("PG", 20.0, 20.0));
    assert_eq!(charts::mean(&charts::ages(&rows)), Some(74.0 / 3.0));
}

#[test]
fn missing_dataset_is_an_error() {
    let mut path = std::env::temp_dir();
    path.push("nba_stats_charts_definitely_missing.csv");
    let _ = fs::remove_file(&path);
    assert!(charts::load_chart_rows(&path).is_err());
}

#[test]
fn dataset_dropped_in_later_is_picked_up_after_retry() {
    let mut path = std::env::temp_dir();
    path.push("nba_stats_charts_late_dataset.csv");
    let _ = fs::remove_file(&path);

    let mut data = ChartDataset::default();
    data.ensure_loaded(&path);
    assert!(data.error().is_some());
    assert!(data.rows().is_none());

    fs::write(&path, "Pos,PTS,Age\nC,12.5,27\n").unwrap();

    // failure is remembered until a retry is asked for
    data.ensure_loaded(&path);
    assert!(data.rows().is_none());

    data.retry();
    data.ensure_loaded(&path);
    assert_eq!(data.error(), None);
    assert_eq!(data.rows(), Some(&[row("C", 12.5, 27.0)][..]));
}
