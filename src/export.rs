// src/export.rs
//
// Table → delimited text. Header row first, no row index.
// Used by both Copy (clipboard) and Export (file).

use std::io::Write;

use crate::config::options::ExportFormat;
use crate::error::Result;
use crate::table::SeasonTable;

/// Write header + rows to any writer.
pub fn write_table<W: Write>(w: W, table: &SeasonTable, format: ExportFormat) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .from_writer(w);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full export text (Copy/Export).
pub fn to_export_string(table: &SeasonTable, format: ExportFormat) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, table, format)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
