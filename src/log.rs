// src/log.rs
//
// Logger setup. Call sites use the `logf!` / `logd!` / `loge!` macros
// (see macros.rs), which forward to the `log` facade.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger,
    TermLogger, TerminalMode, WriteLogger,
};

use crate::config::consts::LOG_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// GUI: everything goes to the debug log file.
    File,
    /// CLI: debug log file plus stderr at the requested level.
    FileAndTerminal,
}

fn config() -> Config {
    ConfigBuilder::new()
        .add_filter_allow_str("nba_stats")
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    File::create(path).ok()
}

/// Install the global logger. Never fails the app: a missing log file or a
/// logger that was already installed just means fewer log lines.
pub fn init(sink: Sink, term_level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if let Some(file) = open_log_file(Path::new(LOG_FILE)) {
        loggers.push(WriteLogger::new(LevelFilter::Debug, config(), file));
    }

    if sink == Sink::FileAndTerminal {
        loggers.push(TermLogger::new(
            term_level,
            config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if loggers.is_empty() {
        return;
    }

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Logger already initialized");
    }
}
