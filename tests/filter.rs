// tests/filter.rs
use std::collections::BTreeSet;

use nba_stats::filter::{self, FilterSelection};
use nba_stats::table::SeasonTable;
use nba_stats::Error;

fn season(rows: &[(&str, &str, &str)]) -> SeasonTable {
    SeasonTable::with(
        2021,
        vec!["Player".into(), "Pos".into(), "Tm".into()],
        rows.iter()
            .map(|(p, tm, pos)| vec![p.to_string(), pos.to_string(), tm.to_string()])
            .collect(),
    )
}

fn players(t: &SeasonTable) -> Vec<&str> {
    (0..t.nrows()).filter_map(|i| t.cell(i, "Player")).collect()
}

#[test]
fn team_and_position_must_both_match() {
    let t = season(&[("A", "BOS", "PG"), ("B", "LAL", "C")]);
    let sel = FilterSelection::new(["BOS"], ["PG", "C"]);
    let out = filter::filter(&t, &sel).unwrap();
    assert_eq!(players(&out), vec!["A"]);
    assert_eq!(out.headers, t.headers);
}

#[test]
fn select_all_keeps_every_row_in_order() {
    let t = season(&[("A", "BOS", "PG"), ("B", "LAL", "C"), ("C", "BOS", "SF"), ("D", "MIA", "SG")]);
    let sel = FilterSelection::all(&t).unwrap();
    assert_eq!(filter::filter_indices(&t, &sel).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn empty_team_or_position_set_gives_empty_table() {
    let t = season(&[("A", "BOS", "PG"), ("B", "LAL", "C")]);

    let no_teams = FilterSelection::new(Vec::<String>::new(), filter::all_positions());
    let out = filter::filter(&t, &no_teams).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.headers, t.headers);

    let no_pos = FilterSelection::new(["BOS", "LAL"], Vec::<String>::new());
    assert!(filter::filter(&t, &no_pos).unwrap().is_empty());
}

#[test]
fn filtering_twice_changes_nothing() {
    let t = season(&[("A", "BOS", "PG"), ("B", "LAL", "C"), ("C", "BOS", "C")]);
    let sel = FilterSelection::new(["BOS"], ["C"]);
    let once = filter::filter(&t, &sel).unwrap();
    let twice = filter::filter(&once, &sel).unwrap();
    assert_eq!(once, twice);
    assert_eq!(players(&once), vec!["C"]);
}

#[test]
fn combined_positions_need_an_exact_selection() {
    let t = season(&[("A", "MIA", "PF-C"), ("B", "MIA", "PF")]);
    let split = FilterSelection::new(["MIA"], ["PF", "C"]);
    assert_eq!(players(&filter::filter(&t, &split).unwrap()), vec!["B"]);

    let exact = FilterSelection::new(["MIA"], ["PF-C"]);
    assert_eq!(players(&filter::filter(&t, &exact).unwrap()), vec!["A"]);
}

#[test]
fn unknown_codes_simply_match_nothing() {
    let t = season(&[("A", "BOS", "PG")]);
    let sel = FilterSelection::new(["XXX"], ["PG"]);
    assert!(filter::filter(&t, &sel).unwrap().is_empty());
}

#[test]
fn missing_position_column_is_an_error() {
    let t = SeasonTable::with(2021, vec!["Player".into(), "Tm".into()], vec![vec!["A".into(), "BOS".into()]]);
    let sel = FilterSelection::new(["BOS"], ["PG"]);
    assert!(matches!(filter::filter(&t, &sel), Err(Error::MissingColumn(c)) if c == "Pos"));
}

#[test]
fn all_positions_are_the_five_standard_ones() {
    let got: BTreeSet<String> = filter::all_positions().into_iter().collect();
    let want: BTreeSet<String> = ["C", "PF", "SF", "PG", "SG"].iter().map(|s| s.to_string()).collect();
    assert_eq!(got, want);
}
