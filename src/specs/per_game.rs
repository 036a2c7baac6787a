// src/specs/per_game.rs
//
// basketball-reference.com season "Player Per Game" page.
// The stats table is the first <table> on the page; its first row is the header.

use crate::config::consts::{BASE_URL, LEAGUE_PREFIX, PER_GAME_SUFFIX};
use crate::config::options::SeasonOptions;
use crate::core::{html, net};
use crate::error::{Error, Result};
use crate::table::RawTable;

/// `https://www.basketball-reference.com/leagues/NBA_<year>_per_game.html`
pub fn season_url(year: u32) -> String {
    format!("{}{}{}{}", BASE_URL, LEAGUE_PREFIX, year, PER_GAME_SUFFIX)
}

/// Fetch the season page and pull out its first table.
pub fn fetch(year: u32) -> Result<RawTable> {
    if !SeasonOptions::in_range(year) {
        return Err(Error::YearOutOfRange(year));
    }
    let url = season_url(year);
    let doc = net::http_get(&url)?;
    extract(&doc, &url)
}

/// Parse an already-downloaded page. `url` is only used for the error message.
pub fn extract(doc: &str, url: &str) -> Result<RawTable> {
    let table = html::first_table(doc)
        .ok_or_else(|| Error::TableNotFound { url: s!(url) })?;
    logd!(
        "PerGame: table cols={} rows={}",
        table.headers.len(),
        table.nrows()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_deterministic() {
        assert_eq!(
            season_url(2021),
            "https://www.basketball-reference.com/leagues/NBA_2021_per_game.html"
        );
    }

    #[test]
    fn out_of_range_year_is_rejected_before_network() {
        assert!(matches!(fetch(1949), Err(Error::YearOutOfRange(1949))));
        assert!(matches!(fetch(2022), Err(Error::YearOutOfRange(2022))));
    }

    #[test]
    fn page_without_table_is_an_error() {
        let err = extract("<html></html>", "u").unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }
}
