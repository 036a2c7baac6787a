// src/cli.rs
//
// Headless frontend: fetch one season, filter it, write the export file.
// Flags map onto `AppOptions`, the same options the GUI edits.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use simplelog::LevelFilter;

use crate::{
    charts,
    config::{
        consts::{DEFAULT_HIST_BINS, LAST_SEASON},
        options::{AppOptions, ExportFormat, SeasonOptions},
    },
    error::{Error, Result},
    file,
    filter::{self, FilterSelection},
    progress::Progress,
    season::SeasonCache,
};

#[derive(Debug, Parser)]
#[command(name = "nba_stats", version, about = "Per-game NBA player stats from basketball-reference.com")]
pub struct Args {
    /// Season year (the year the season ends in)
    #[arg(short, long, default_value_t = LAST_SEASON)]
    pub year: u32,

    /// Team code to keep (repeatable); default: every team of the season
    #[arg(short, long = "team", value_name = "TM")]
    pub teams: Vec<String>,

    /// Position to keep (repeatable); default: C, PF, SF, PG, SG
    #[arg(short, long = "pos", value_name = "POS")]
    pub positions: Vec<String>,

    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output path; the extension follows --format
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print the season's team codes and exit
    #[arg(long)]
    pub list_teams: bool,

    /// Print chart aggregates from this dataset (e.g. nba_data.csv)
    #[arg(long, value_name = "PATH")]
    pub charts: Option<PathBuf>,

    /// Histogram bin count for --charts
    #[arg(long, default_value_t = DEFAULT_HIST_BINS)]
    pub bins: usize,

    /// More output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.season.year = self.year;
        opts.export.format = self.format;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        if let Some(path) = &self.charts {
            opts.charts.dataset_path = path.clone();
        }
        opts.charts.bins = self.bins;
        opts
    }
}

/// Status lines on stderr so stdout stays clean for listings.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, year: u32) {
        eprintln!("Fetched season {year}");
    }
}

pub fn run(args: &Args) -> Result<()> {
    let opts = args.to_options();
    let year = opts.season.year;
    logd!("CLI: year={} format={:?} out={}", year, opts.export.format, opts.export.out_path().display());

    if let Some(path) = &args.charts {
        print_charts(path, opts.charts.bins)?;
        if !args.list_teams && args.teams.is_empty() && args.out.is_none() {
            return Ok(());
        }
    }

    if !SeasonOptions::in_range(year) {
        return Err(Error::YearOutOfRange(year));
    }

    let cache = SeasonCache::default();
    let season = cache.get_or_load_with(year, Some(&mut StderrProgress))?;

    if args.list_teams {
        for team in season.unique_teams()? {
            println!("{team}");
        }
        return Ok(());
    }

    let teams = if args.teams.is_empty() { season.unique_teams()? } else { args.teams.clone() };
    let positions = if args.positions.is_empty() { filter::all_positions() } else { args.positions.clone() };
    let sel = FilterSelection::new(teams, positions);

    let view = filter::filter(&season, &sel)?;
    let path = file::write_export(&opts.export, &view)?;

    println!(
        "{}: {} of {} rows ({} team(s), {} position(s)) → {}",
        year,
        view.nrows(),
        season.nrows(),
        sel.teams.len(),
        sel.positions.len(),
        path.display()
    );
    Ok(())
}

fn print_charts(path: &Path, bins: usize) -> Result<()> {
    let rows = charts::load_chart_rows(path)?;

    println!("Average points per game by position");
    for (pos, avg) in charts::avg_points_by_position(&rows) {
        println!("  {pos:<6} {avg:>6.2}");
    }

    let hist = charts::age_histogram(&charts::ages(&rows), bins);
    match hist.mean {
        Some(m) => println!("Age distribution (mean {m:.2})"),
        None => println!("Age distribution (no rows)"),
    }
    for (i, n) in hist.counts.iter().enumerate() {
        println!("  {:>5.1}–{:<5.1} {:>5}", hist.edges[i], hist.edges[i + 1], n);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_gui() {
        let args = Args::try_parse_from(["cli"]).unwrap();
        let opts = args.to_options();
        assert_eq!(opts.season.year, LAST_SEASON);
        assert_eq!(opts.export.format, ExportFormat::Csv);
        assert!(opts.export.is_default_path());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn repeatable_filters_and_format() {
        let args = Args::try_parse_from([
            "cli", "--year", "1998", "-t", "CHI", "--team", "UTA", "--pos", "SG",
            "--format", "tsv", "--out", "tmp/finals", "-vv",
        ])
        .unwrap();
        assert_eq!(args.teams, vec!["CHI", "UTA"]);
        assert_eq!(args.positions, vec!["SG"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let opts = args.to_options();
        assert_eq!(opts.season.year, 1998);
        assert_eq!(opts.export.out_path(), PathBuf::from("tmp/finals.tsv"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["cli", "--format", "xlsx"]).is_err());
    }

    #[test]
    fn out_of_range_year_fails_before_fetching() {
        let args = Args::try_parse_from(["cli", "--year", "1900"]).unwrap();
        assert!(matches!(run(&args), Err(Error::YearOutOfRange(1900))));
    }
}
