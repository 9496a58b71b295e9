//! Yearly agricultural record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Metric;

/// One row of the source spreadsheet.
///
/// Metrics are optional: a blank cell is kept as `None` and shows up as a gap
/// in the corresponding chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub production: Option<Decimal>,
    #[serde(rename = "yield")]
    pub crop_yield: Option<Decimal>,
    pub rainfall: Option<Decimal>,
    pub avg_temp: Option<Decimal>,
    pub area_harvested: Option<Decimal>,
    pub avg_min_temp: Option<Decimal>,
    pub avg_max_temp: Option<Decimal>,
}

impl Record {
    /// Build a record from values ordered like [`Metric::ALL`]
    pub fn from_values(year: i32, values: [Option<Decimal>; 7]) -> Self {
        let [production, crop_yield, rainfall, avg_temp, area_harvested, avg_min_temp, avg_max_temp] =
            values;
        Self {
            year,
            production,
            crop_yield,
            rainfall,
            avg_temp,
            area_harvested,
            avg_min_temp,
            avg_max_temp,
        }
    }

    pub fn value(&self, metric: Metric) -> Option<Decimal> {
        match metric {
            Metric::Production => self.production,
            Metric::Yield => self.crop_yield,
            Metric::Rainfall => self.rainfall,
            Metric::AvgTemp => self.avg_temp,
            Metric::AreaHarvested => self.area_harvested,
            Metric::AvgMinTemp => self.avg_min_temp,
            Metric::AvgMaxTemp => self.avg_max_temp,
        }
    }
}
