// tests/html_table.rs
use nba_stats::season::normalize;
use nba_stats::specs::per_game;

const PAGE: &str = include_str!("fixtures/per_game_2021.html");

#[test]
fn extracts_first_table_skipping_commented_out_markup() {
    let raw = per_game::extract(PAGE, &per_game::season_url(2021)).unwrap();
    assert_eq!(raw.headers, vec!["Rk", "Player", "Pos", "Age", "Tm", "G", "3P%", "PTS"]);
    // two players, one repeated header band, two players
    assert_eq!(raw.nrows(), 5);
    assert_eq!(raw.rows[0][6], None);
    assert_eq!(raw.rows[2][3].as_deref(), Some("Age"));
}

#[test]
fn entities_and_links_are_reduced_to_text() {
    let raw = per_game::extract(PAGE, "fixture").unwrap();
    assert_eq!(raw.rows[3][1].as_deref(), Some("Luka Dončić"));
    assert_eq!(raw.rows[4][1].as_deref(), Some("Shaquille O'Neal"));
    assert_eq!(raw.rows[3][4].as_deref(), Some("DAL"));
}

#[test]
fn page_to_season_table() {
    let raw = per_game::extract(PAGE, "fixture").unwrap();
    let season = normalize(2021, raw).unwrap();

    assert_eq!(season.year, 2021);
    assert_eq!(season.headers, vec!["Player", "Pos", "Age", "Tm", "G", "3P%", "PTS"]);
    assert_eq!(season.nrows(), 4);
    assert_eq!(season.cell(0, "3P%"), Some("0"));
    assert_eq!(season.cell(1, "3P%"), Some(".125"));
    assert_eq!(season.unique_teams().unwrap(), vec!["DAL", "MIA", "NOP"]);
    assert_eq!(season.unique_positions().unwrap(), vec!["C", "PF", "PF-C", "PG"]);
}
