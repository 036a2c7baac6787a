// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::export::write_table;
use crate::table::SeasonTable;

/// Write the export file described by `export` (path, format).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &SeasonTable) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, export.format)?;
    out.flush()?;

    logf!(
        "Export: OK rows={} cols={} → {}",
        table.nrows(),
        table.ncols(),
        path.display()
    );
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
