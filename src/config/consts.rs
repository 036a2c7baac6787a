// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.basketball-reference.com";
pub const LEAGUE_PREFIX: &str = "/leagues/NBA_";
pub const PER_GAME_SUFFIX: &str = "_per_game.html";
pub const USER_AGENT: &str = concat!("nba_stats/", env!("CARGO_PKG_VERSION"));

// Seasons offered by the year picker
pub const FIRST_SEASON: u32 = 1950;
pub const LAST_SEASON: u32 = 2021;

// Columns the pipeline relies on
pub const COL_RANK: &str = "Rk";
pub const COL_PLAYER: &str = "Player";
pub const COL_POS: &str = "Pos";
pub const COL_AGE: &str = "Age";
pub const COL_TEAM: &str = "Tm";

/// Value written into every absent cell.
pub const FILL_VALUE: &str = "0";

pub const POSITIONS: &[&str] = &["C", "PF", "SF", "PG", "SG"];

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const STATIC_DATASET: &str = "nba_data.csv";
pub const HEADER_IMAGE: &str = "NBA_header.png";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "playerstats";

// Charts
pub const DEFAULT_HIST_BINS: usize = 10;
