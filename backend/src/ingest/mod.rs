//! Spreadsheet ingestion
//!
//! Reads the input file once at startup and hands the rows to
//! [`shared::Table::load`]. The format is picked from the file extension.

mod delimited;
mod workbook;

use std::path::Path;

use shared::{LoadError, RawTable, Table};

pub use delimited::read_csv;
pub use workbook::read_workbook;

/// Extensions handled by the workbook reader
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read `path` and build the year-ordered table
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table, LoadError> {
    let raw = read_raw(path, sheet)?;
    let table = Table::load(&raw)?;

    if let Some((first_year, last_year)) = table.year_span() {
        tracing::info!(
            path = %path.display(),
            records = table.len(),
            first_year,
            last_year,
            "Loaded yearly table"
        );
    }

    let duplicates = table.duplicate_years();
    if !duplicates.is_empty() {
        tracing::warn!(
            ?duplicates,
            "Duplicate years in input; the last row of each year feeds the summary"
        );
    }

    Ok(table)
}

/// Read the header row and data rows without interpreting them
pub fn read_raw(path: &Path, sheet: Option<&str>) -> Result<RawTable, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("csv") => read_csv(path),
        Some(ext) if WORKBOOK_EXTENSIONS.contains(&ext) => read_workbook(path, sheet),
        Some(ext) => Err(LoadError::UnsupportedFormat(ext.to_string())),
        None => Err(LoadError::UnsupportedFormat(format!(
            "{} has no extension",
            path.display()
        ))),
    }
}
