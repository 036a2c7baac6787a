// tests/export.rs
use std::fs;
use std::path::PathBuf;

use nba_stats::config::options::{ExportFormat, ExportOptions};
use nba_stats::export::to_export_string;
use nba_stats::file::write_export;
use nba_stats::filter::{self, FilterSelection};
use nba_stats::table::SeasonTable;
use nba_stats::Error;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nba_stats_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn season() -> SeasonTable {
    SeasonTable::with(
        2021,
        vec!["Player".into(), "Pos".into(), "Age".into(), "Tm".into(), "PTS".into()],
        vec![
            vec!["A".into(), "PG".into(), "24".into(), "BOS".into(), "18.2".into()],
            vec!["B".into(), "C".into(), "29".into(), "LAL".into(), "11.0".into()],
            vec!["C".into(), "SF".into(), "22".into(), "BOS".into(), "0".into()],
        ],
    )
}

#[test]
fn default_target_is_playerstats_csv() {
    let opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert_eq!(opts.out_path(), PathBuf::from("out").join("playerstats.csv"));
}

#[test]
fn extension_follows_the_format() {
    let mut opts = ExportOptions::default();
    opts.set_path("some/dir/season.txt");
    assert_eq!(opts.out_path(), PathBuf::from("some/dir/season.csv"));
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("some/dir/season.tsv"));
    assert!(!opts.is_default_path());
}

#[test]
fn writes_exactly_the_filtered_rows_with_header() {
    let dir = tmp_dir("filtered");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("playerstats").to_str().unwrap());

    let view = filter::filter(&season(), &FilterSelection::new(["BOS"], filter::all_positions())).unwrap();
    let path = write_export(&opts, &view).unwrap();

    assert_eq!(path, dir.join("playerstats.csv"));
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Player,Pos,Age,Tm,PTS\nA,PG,24,BOS,18.2\nC,SF,22,BOS,0\n");
}

#[test]
fn file_matches_the_clipboard_text() {
    let dir = tmp_dir("clipboard");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.join("stats").to_str().unwrap());

    let t = season();
    let path = write_export(&opts, &t).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), to_export_string(&t, ExportFormat::Tsv).unwrap());
}

#[test]
fn empty_selection_still_writes_the_header() {
    let dir = tmp_dir("empty");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("none").to_str().unwrap());

    let view = filter::filter(&season(), &FilterSelection::default()).unwrap();
    let path = write_export(&opts, &view).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "Player,Pos,Age,Tm,PTS\n");
}

#[test]
fn overwrites_an_existing_file() {
    let dir = tmp_dir("overwrite");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("again").to_str().unwrap());
    fs::write(dir.join("again.csv"), "stale contents that are longer than the new file\n".repeat(20)).unwrap();

    let view = season().project_rows(&[1]);
    let path = write_export(&opts, &view).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "Player,Pos,Age,Tm,PTS\nB,C,29,LAL,11.0\n");
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tmp_dir("nested");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("a").join("b").join("out").to_str().unwrap());
    let path = write_export(&opts, &season()).unwrap();
    assert!(path.is_file());
}

#[test]
fn parent_that_is_a_file_is_rejected() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("out").to_str().unwrap());
    assert!(matches!(write_export(&opts, &season()), Err(Error::NotADirectory(_))));
}
