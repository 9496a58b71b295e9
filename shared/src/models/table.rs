//! The immutable yearly table and its year-filtered views

use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use super::{Metric, Record, YEAR_COLUMN};
use crate::error::LoadError;
use crate::types::{RawCell, RawTable};

/// Records ordered by year ascending.
///
/// Ordering is stable, so rows sharing a year keep their source order and the
/// last of them is the one [`Table::last_for_year`] returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|record| record.year);
        Self { records }
    }

    /// Interpret raw spreadsheet rows.
    ///
    /// Rows whose cells are all blank are skipped. Extra columns are ignored.
    pub fn load(raw: &RawTable) -> Result<Self, LoadError> {
        let year_index = raw
            .column_index(YEAR_COLUMN)
            .ok_or_else(|| LoadError::MissingColumn(YEAR_COLUMN.to_string()))?;

        let mut metric_indexes = [0usize; 7];
        for metric in Metric::ALL {
            metric_indexes[metric.index()] = raw
                .column_index(metric.column())
                .ok_or_else(|| LoadError::MissingColumn(metric.column().to_string()))?;
        }

        let mut records = Vec::with_capacity(raw.rows.len());
        for (position, row) in raw.rows.iter().enumerate() {
            if row.iter().all(RawCell::is_empty) {
                continue;
            }
            let row_number = raw.row_number(position);

            let year_cell = row.get(year_index).unwrap_or(&RawCell::Empty);
            let year = year_cell.as_year().ok_or_else(|| LoadError::InvalidYear {
                row: row_number,
                value: year_cell.display(),
            })?;

            let mut values = [None; 7];
            for metric in Metric::ALL {
                let cell = row
                    .get(metric_indexes[metric.index()])
                    .unwrap_or(&RawCell::Empty);
                values[metric.index()] = metric_value(cell, row_number, metric)?;
            }

            records.push(Record::from_values(year, values));
        }

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years in ascending order
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|record| record.year).collect();
        years.dedup();
        years
    }

    /// Smallest and largest year, `None` for an empty table
    pub fn year_span(&self) -> Option<(i32, i32)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.year, last.year)),
            _ => None,
        }
    }

    /// Selector default: the latest year
    pub fn default_year(&self) -> Option<i32> {
        self.records.last().map(|record| record.year)
    }

    /// Years that appear on more than one row
    pub fn duplicate_years(&self) -> Vec<i32> {
        let mut duplicates: Vec<i32> = self
            .records
            .windows(2)
            .filter(|pair| pair[0].year == pair[1].year)
            .map(|pair| pair[0].year)
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// All records up to and including `year`; always a prefix of the table
    pub fn filter_up_to(&self, year: i32) -> FilteredView<'_> {
        let end = self.records.partition_point(|record| record.year <= year);
        FilteredView {
            up_to: year,
            records: &self.records[..end],
        }
    }

    /// Last record whose year equals `year` exactly
    pub fn last_for_year(&self, year: i32) -> Option<&Record> {
        let end = self.records.partition_point(|record| record.year <= year);
        end.checked_sub(1)
            .map(|index| &self.records[index])
            .filter(|record| record.year == year)
    }
}

fn metric_value(
    cell: &RawCell,
    row: usize,
    metric: Metric,
) -> Result<Option<Decimal>, LoadError> {
    let invalid = || LoadError::InvalidValue {
        row,
        column: metric.column().to_string(),
        value: cell.display(),
    };

    match cell {
        RawCell::Empty => Ok(None),
        RawCell::Int(value) => Ok(Some(Decimal::from(*value))),
        RawCell::Float(value) => Decimal::try_from(*value)
            .map(|value| Some(value.normalize()))
            .map_err(|_| invalid()),
        RawCell::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map(|value| Some(value.normalize()))
                .map_err(|_| invalid())
        }
        RawCell::Date(_) => Err(invalid()),
    }
}

/// Read-only projection of the table up to a selected year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredView<'a> {
    up_to: i32,
    records: &'a [Record],
}

impl<'a> FilteredView<'a> {
    pub fn up_to(&self) -> i32 {
        self.up_to
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.year).collect()
    }

    pub fn values(&self, metric: Metric) -> Vec<Option<Decimal>> {
        self.records
            .iter()
            .map(|record| record.value(metric))
            .collect()
    }
}
