//! Excel and OpenDocument workbooks via calamine

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use shared::{LoadError, RawCell, RawTable};

/// Read one worksheet; the first row is the header.
///
/// `sheet` selects a worksheet by name, otherwise the first one is used.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<RawTable, LoadError> {
    let read_error = |err: calamine::Error| LoadError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    };

    let mut workbook = open_workbook_auto(path).map_err(read_error)?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) if sheet_names.iter().any(|candidate| candidate == name) => name.to_string(),
        Some(name) => return Err(LoadError::MissingWorksheet(name.to_string())),
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::MissingWorksheet("(first worksheet)".to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet_name).map_err(read_error)?;
    // The range starts at the first used cell, not at A1
    let header_row = range
        .start()
        .map(|(row, _)| row as usize + 1)
        .unwrap_or(1);
    let mut rows = range.rows();

    let headers = rows
        .next()
        .ok_or(LoadError::Empty)?
        .iter()
        .map(header_text)
        .collect();

    let mut raw = RawTable::new(headers).with_header_row(header_row);
    for row in rows {
        raw.push_row(row.iter().map(raw_cell).collect());
    }

    tracing::debug!(sheet = %sheet_name, header_row, rows = raw.rows.len(), "Read worksheet");
    Ok(raw)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Int(value) => RawCell::Int(*value),
        Data::Float(value) => RawCell::Float(*value),
        Data::String(text) | Data::DateTimeIso(text) => RawCell::Text(text.clone()),
        Data::DateTime(datetime) => datetime
            .as_datetime()
            .map(|datetime| RawCell::Date(datetime.date()))
            .unwrap_or_else(|| RawCell::Float(datetime.as_f64())),
        other => RawCell::Text(other.to_string()),
    }
}
