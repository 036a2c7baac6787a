// src/season/normalize.rs

use crate::config::consts::{COL_AGE, COL_PLAYER, COL_POS, COL_RANK, COL_TEAM, FILL_VALUE};
use crate::error::Result;
use crate::table::{RawTable, SeasonTable};

/// Turn the raw page table into a season table:
/// - `Rk`, `Player`, `Pos`, `Age`, `Tm` must exist (first missing one is reported);
/// - rows whose `Age` cell reads "Age" are repeated header bands and are dropped;
/// - absent cells become "0", whatever the column;
/// - the `Rk` column is dropped.
///
/// Column and row order are otherwise preserved.
pub fn normalize(year: u32, raw: RawTable) -> Result<SeasonTable> {
    // Checked in this order; the first missing one is reported.
    let rank_ci = raw.require_column(COL_RANK)?;
    raw.require_column(COL_PLAYER)?;
    raw.require_column(COL_POS)?;
    let age_ci = raw.require_column(COL_AGE)?;
    raw.require_column(COL_TEAM)?;

    let RawTable { headers, rows } = raw;
    let before = rows.len();

    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .filter(|r| r.get(age_ci).and_then(|c| c.as_deref()) != Some(COL_AGE))
        .map(|r| {
            r.into_iter()
                .enumerate()
                .filter(|(ci, _)| *ci != rank_ci)
                .map(|(_, c)| c.unwrap_or_else(|| s!(FILL_VALUE)))
                .collect()
        })
        .collect();

    let headers: Vec<String> = headers
        .into_iter()
        .enumerate()
        .filter(|(ci, _)| *ci != rank_ci)
        .map(|(_, h)| h)
        .collect();

    logd!(
        "Normalize: year={} rows {} → {} (dropped {} header bands)",
        year,
        before,
        rows.len(),
        before - rows.len()
    );

    Ok(SeasonTable::with(year, headers, rows))
}
