//! Comma-separated input files

use csv::{ReaderBuilder, Trim};
use std::path::Path;

use shared::{LoadError, RawCell, RawTable};

/// Read a CSV file whose first record is the header
pub fn read_csv(path: &Path) -> Result<RawTable, LoadError> {
    let read_error = |err: csv::Error| LoadError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(read_error)?;

    let headers = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut raw = RawTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        raw.push_row(record.iter().map(text_cell).collect());
    }

    Ok(raw)
}

// Decimal text stays text so the table loader can parse it exactly
fn text_cell(field: &str) -> RawCell {
    if field.is_empty() {
        RawCell::Empty
    } else if let Ok(value) = field.parse::<i64>() {
        RawCell::Int(value)
    } else {
        RawCell::Text(field.to_string())
    }
}
