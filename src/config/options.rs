// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub season: SeasonOptions,
    pub export: ExportOptions,
    pub charts: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonOptions {
    pub year: u32,
}

impl Default for SeasonOptions {
    fn default() -> Self {
        // Picker lists newest first
        Self { year: LAST_SEASON }
    }
}

impl SeasonOptions {
    /// Years offered to the user, newest first.
    pub fn selectable_years() -> impl Iterator<Item = u32> {
        (FIRST_SEASON..=LAST_SEASON).rev()
    }

    pub fn in_range(year: u32) -> bool {
        (FIRST_SEASON..=LAST_SEASON).contains(&year)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{}.{}", stem, self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE_STEM),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub show_avg_points: bool,
    pub show_age_histogram: bool,
    pub dataset_path: PathBuf,
    pub bins: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_avg_points: false,
            show_age_histogram: false,
            dataset_path: PathBuf::from(STATIC_DATASET),
            bins: DEFAULT_HIST_BINS,
        }
    }
}
