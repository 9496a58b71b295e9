//! Raw tabular input handed from the spreadsheet readers to the table loader

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Earliest and latest calendar years accepted in the `Year` column (four-digit `%Y`)
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A single spreadsheet cell before interpretation
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl RawCell {
    pub fn is_empty(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Interpret the cell as a calendar year.
    ///
    /// Accepts whole numbers, numeric text, ISO dates and date cells, mirroring
    /// what a `%Y` year column looks like after a round trip through a spreadsheet.
    pub fn as_year(&self) -> Option<i32> {
        let year = match self {
            RawCell::Int(value) => i32::try_from(*value).ok()?,
            RawCell::Float(value) => whole_number(*value)?,
            RawCell::Date(date) => date.year(),
            RawCell::Text(text) => year_from_text(text.trim())?,
            RawCell::Empty => return None,
        };

        (MIN_YEAR..=MAX_YEAR).contains(&year).then_some(year)
    }

    /// Human-readable cell content for error messages
    pub fn display(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Int(value) => value.to_string(),
            RawCell::Float(value) => value.to_string(),
            RawCell::Text(text) => text.clone(),
            RawCell::Date(date) => date.to_string(),
        }
    }
}

fn whole_number(value: f64) -> Option<i32> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

fn year_from_text(text: &str) -> Option<i32> {
    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }
    if let Ok(value) = text.parse::<f64>() {
        return whole_number(value);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.year());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.year())
}

/// Header row plus data rows, as read from the first worksheet or a CSV file
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
    /// 1-based spreadsheet row holding the header
    pub header_row: usize,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            header_row: 1,
        }
    }

    /// Place the header on spreadsheet row `row` instead of the first row
    pub fn with_header_row(mut self, row: usize) -> Self {
        self.header_row = row;
        self
    }

    /// Spreadsheet row number of the data row at `position`
    pub fn row_number(&self, position: usize) -> usize {
        self.header_row + position + 1
    }

    pub fn push_row(&mut self, row: Vec<RawCell>) {
        self.rows.push(row);
    }

    /// Position of a column, comparing header names after trimming whitespace
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }
}
