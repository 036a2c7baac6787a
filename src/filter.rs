// src/filter.rs
//
// Membership filter over a season table: keep a row iff its team is selected
// AND its position is selected. Exact string match on both.
//
// A combined position such as "PF-C" only passes if "PF-C" itself is selected;
// picking "PF" and "C" does not admit it.

use std::collections::BTreeSet;

use crate::config::consts::{COL_POS, COL_TEAM, POSITIONS};
use crate::error::Result;
use crate::table::SeasonTable;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub teams: BTreeSet<String>,
    pub positions: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<T, P>(teams: T, positions: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            positions: positions.into_iter().map(Into::into).collect(),
        }
    }

    /// Every team present in `table` and the five standard positions.
    pub fn all(table: &SeasonTable) -> Result<Self> {
        Ok(Self::new(table.unique_teams()?, all_positions()))
    }

    #[inline] pub fn is_none(&self) -> bool { self.teams.is_empty() || self.positions.is_empty() }

    pub fn admits(&self, team: &str, pos: &str) -> bool {
        self.teams.contains(team) && self.positions.contains(pos)
    }
}

pub fn all_positions() -> Vec<String> {
    POSITIONS.iter().map(|p| s!(*p)).collect()
}

/// Positions of kept rows, in table order.
pub fn filter_indices(table: &SeasonTable, sel: &FilterSelection) -> Result<Vec<usize>> {
    let team_ci = table.require_column(COL_TEAM)?;
    let pos_ci = table.require_column(COL_POS)?;

    if sel.is_none() {
        return Ok(Vec::new());
    }

    Ok(table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| match (r.get(team_ci), r.get(pos_ci)) {
            (Some(team), Some(pos)) => sel.admits(team, pos),
            _ => false,
        })
        .map(|(ix, _)| ix)
        .collect())
}

/// Stable filter; same headers, subset of rows.
pub fn filter(table: &SeasonTable, sel: &FilterSelection) -> Result<SeasonTable> {
    let ix = filter_indices(table, sel)?;
    Ok(table.project_rows(&ix))
}
