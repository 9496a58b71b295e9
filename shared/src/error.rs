//! Error types for loading the yearly table and presenting it

use thiserror::Error;

/// Failure to turn an input file into a [`crate::Table`]. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Worksheet not found: {0}")]
    MissingWorksheet(String),

    #[error("Spreadsheet contains no data rows")]
    Empty,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: cannot interpret {value:?} as a year")]
    InvalidYear { row: usize, value: String },

    #[error("Row {row}, column {column}: cannot interpret {value:?} as a number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

/// Failure while deriving the dashboard outputs for a selected year
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    #[error("No record found for year {year}")]
    ExactMatch { year: i32 },

    #[error("Year {year} is outside the available range {min}-{max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    #[error("Table contains no records")]
    EmptyTable,
}
