//! The seven yearly metrics tracked by the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A metric column of the source spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Production,
    Yield,
    Rainfall,
    AvgTemp,
    AreaHarvested,
    AvgMinTemp,
    AvgMaxTemp,
}

/// Header of the year column in the source spreadsheet
pub const YEAR_COLUMN: &str = "Year";

impl Metric {
    /// All metrics in dashboard order
    pub const ALL: [Metric; 7] = [
        Metric::Production,
        Metric::Yield,
        Metric::Rainfall,
        Metric::AvgTemp,
        Metric::AreaHarvested,
        Metric::AvgMinTemp,
        Metric::AvgMaxTemp,
    ];

    /// Position in [`Metric::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header in the source spreadsheet
    pub fn column(self) -> &'static str {
        match self {
            Metric::Production => "Production",
            Metric::Yield => "Yield",
            Metric::Rainfall => "Rainfall",
            Metric::AvgTemp => "Avg Temp",
            Metric::AreaHarvested => "Area Harvested",
            Metric::AvgMinTemp => "Avg Min Temp",
            Metric::AvgMaxTemp => "Avg Max Temp",
        }
    }

    /// URL-friendly identifier, also used as the serialized form
    pub fn slug(self) -> &'static str {
        match self {
            Metric::Production => "production",
            Metric::Yield => "yield",
            Metric::Rainfall => "rainfall",
            Metric::AvgTemp => "avg-temp",
            Metric::AreaHarvested => "area-harvested",
            Metric::AvgMinTemp => "avg-min-temp",
            Metric::AvgMaxTemp => "avg-max-temp",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = String;

    /// Accepts either the slug (`avg-temp`) or the column header (`Avg Temp`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Metric::ALL
            .into_iter()
            .find(|metric| {
                metric.slug() == needle || metric.column().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("Unknown metric: {}", needle))
    }
}
