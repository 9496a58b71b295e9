//! Summary panel for the selected year

use rust_decimal::Decimal;
use serde::Serialize;

use super::Record;

/// Text shown for a metric cell that was left blank
pub const MISSING_VALUE: &str = "n/a";

/// Content of the "Last Year Data" panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryPanel {
    Available { text: String },
    /// Placeholder when the selected year has no exact row
    Unavailable { message: String },
}

impl SummaryPanel {
    pub fn text(&self) -> &str {
        match self {
            SummaryPanel::Available { text } => text,
            SummaryPanel::Unavailable { message } => message,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SummaryPanel::Available { .. })
    }
}

/// `Production: {p} | Rainfall: {r} | Avg Temp: {t}`
pub fn summary_line(record: &Record) -> String {
    format!(
        "Production: {} | Rainfall: {} | Avg Temp: {}",
        format_value(record.production),
        format_value(record.rainfall),
        format_value(record.avg_temp)
    )
}

fn format_value(value: Option<Decimal>) -> String {
    value
        .map(|value| value.normalize().to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_summary_line_format() {
        let mut record = Record::from_values(2021, [None; 7]);
        record.production = Some(Decimal::from(110));
        record.rainfall = Some(Decimal::from_str("750.00").unwrap());
        record.avg_temp = Some(Decimal::from_str("26.5").unwrap());

        assert_eq!(
            summary_line(&record),
            "Production: 110 | Rainfall: 750 | Avg Temp: 26.5"
        );
    }

    #[test]
    fn test_summary_line_missing_value() {
        let record = Record::from_values(2021, [None; 7]);
        assert_eq!(
            summary_line(&record),
            "Production: n/a | Rainfall: n/a | Avg Temp: n/a"
        );
    }

    #[test]
    fn test_panel_serialization() {
        let panel = SummaryPanel::Unavailable {
            message: "No record found for year 2019".to_string(),
        };
        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["message"], "No record found for year 2019");
        assert!(!panel.is_available());
    }
}
