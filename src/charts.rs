// src/charts.rs
//
// Read-only aggregates over the static dataset (`nba_data.csv`).
// Pure functions; the GUI recomputes them on every frame they are shown.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One record of the static dataset. Other columns are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChartRow {
    #[serde(rename = "Pos")]
    pub pos: String,
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "Age")]
    pub age: f64,
}

pub fn load_chart_rows(path: &Path) -> Result<Vec<ChartRow>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr
        .deserialize::<ChartRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    logd!("Charts: loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// The dataset as the GUI sees it: read on first use, kept afterwards.
/// A failed read is remembered until `retry` so it isn't re-read every frame.
#[derive(Debug, Default)]
pub struct ChartDataset {
    rows: Option<Vec<ChartRow>>,
    error: Option<String>,
}

impl ChartDataset {
    pub fn ensure_loaded(&mut self, path: &Path) {
        if self.rows.is_some() || self.error.is_some() {
            return;
        }
        match load_chart_rows(path) {
            Ok(rows) => {
                logf!("Charts: dataset rows={} path={}", rows.len(), path.display());
                self.rows = Some(rows);
            }
            Err(e) => {
                loge!("Charts: cannot read {}: {}", path.display(), e);
                self.error = Some(format!("Cannot read {}: {e}", path.display()));
            }
        }
    }

    /// Forget a failed read so the next `ensure_loaded` tries again.
    pub fn retry(&mut self) {
        self.error = None;
    }

    pub fn rows(&self) -> Option<&[ChartRow]> {
        self.rows.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Mean points per game for each position string, sorted by position.
pub fn avg_points_by_position(rows: &[ChartRow]) -> Vec<(String, f64)> {
    let mut acc: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in rows {
        let e = acc.entry(r.pos.as_str()).or_insert((0.0, 0));
        e.0 += r.pts;
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(pos, (sum, n))| (s!(pos), sum / n as f64))
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgeHistogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    pub mean: Option<f64>,
}

impl AgeHistogram {
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Equal-width bins over [min, max]; the maximum lands in the last bin.
/// If every age is the same, the range is widened by half a year each side.
pub fn age_histogram(ages: &[f64], bins: usize) -> AgeHistogram {
    let mean = mean(ages);
    if ages.is_empty() || bins == 0 {
        return AgeHistogram { edges: Vec::new(), counts: Vec::new(), mean };
    }

    let mut lo = ages.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &a in ages {
        let ix = (((a - lo) / width).floor() as usize).min(bins - 1);
        counts[ix] += 1;
    }

    AgeHistogram { edges, counts, mean }
}

pub fn ages(rows: &[ChartRow]) -> Vec<f64> {
    rows.iter().map(|r| r.age).collect()
}
