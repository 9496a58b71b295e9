//! Year-filtered series presenter
//!
//! One pure function, [`present`], turns the loaded table and a selected year
//! into every dashboard output. The smaller helpers are exposed for callers
//! that only need a single output.

use crate::error::{LoadError, PresentError};
use crate::models::{
    summary_line, ChartCatalog, ChartDescriptor, ChartStyle, DashboardView, FilteredView, Metric,
    SummaryPanel, Table, YearOptions,
};
use crate::types::RawTable;

/// Interpret raw spreadsheet rows as a year-ordered table
pub fn load(raw: &RawTable) -> Result<Table, LoadError> {
    Table::load(raw)
}

/// Distinct years, ascending
pub fn available_years(table: &Table) -> Vec<i32> {
    table.available_years()
}

/// Selector options with the latest year as default
pub fn year_options(table: &Table) -> YearOptions {
    YearOptions {
        years: table.available_years(),
        default_year: table.default_year(),
    }
}

pub fn filter_up_to(table: &Table, year: i32) -> FilteredView<'_> {
    table.filter_up_to(year)
}

pub fn build_chart_descriptor(
    view: &FilteredView<'_>,
    metric: Metric,
    style: &ChartStyle,
) -> ChartDescriptor {
    ChartDescriptor::build(view, metric, style)
}

/// Summary text for the last record of exactly `year`
pub fn build_summary(table: &Table, year: i32) -> Result<String, PresentError> {
    table
        .last_for_year(year)
        .map(summary_line)
        .ok_or(PresentError::ExactMatch { year })
}

/// Reject years outside the table's span
pub fn check_year(table: &Table, year: i32) -> Result<(), PresentError> {
    let (min, max) = table.year_span().ok_or(PresentError::EmptyTable)?;
    if year < min || year > max {
        return Err(PresentError::OutOfRange { year, min, max });
    }
    Ok(())
}

/// Compute all eight outputs for `year`.
///
/// A year inside the table's span without an exact row still renders charts;
/// only the summary panel falls back to a placeholder.
pub fn present(
    table: &Table,
    catalog: &ChartCatalog,
    year: i32,
) -> Result<DashboardView, PresentError> {
    check_year(table, year)?;

    let view = table.filter_up_to(year);
    let charts = Metric::ALL.map(|metric| ChartDescriptor::build(&view, metric, catalog.style(metric)));

    let summary = match build_summary(table, year) {
        Ok(text) => SummaryPanel::Available { text },
        Err(err) => SummaryPanel::Unavailable {
            message: err.to_string(),
        },
    };

    Ok(DashboardView {
        selected_year: year,
        records: view.records().to_vec(),
        charts,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use rust_decimal::Decimal;

    fn scenario_table() -> Table {
        let row = |year: i32, production: i64, rainfall: i64, avg_temp: i64| {
            let mut record = Record::from_values(year, [None; 7]);
            record.production = Some(Decimal::from(production));
            record.rainfall = Some(Decimal::from(rainfall));
            record.avg_temp = Some(Decimal::from(avg_temp));
            record
        };
        Table::from_records(vec![row(2020, 100, 800, 25), row(2021, 110, 750, 26)])
    }

    #[test]
    fn test_filter_scenario() {
        let table = scenario_table();
        let view = filter_up_to(&table, 2020);
        assert_eq!(view.years(), vec![2020]);
    }

    #[test]
    fn test_summary_scenario() {
        let table = scenario_table();
        assert_eq!(
            build_summary(&table, 2021).unwrap(),
            "Production: 110 | Rainfall: 750 | Avg Temp: 26"
        );
        assert_eq!(build_summary(&table, 2021), build_summary(&table, 2021));
    }

    #[test]
    fn test_present_default_year_covers_whole_table() {
        let table = scenario_table();
        let view = present(&table, &ChartCatalog::default(), 2021).unwrap();

        assert_eq!(view.records.len(), table.len());
        assert!(view.charts.iter().all(|chart| chart.x == vec![2020, 2021]));
        assert_eq!(view.charts[0].metric, Metric::Production);
        assert!(view.summary.is_available());
    }

    #[test]
    fn test_present_gap_year_uses_placeholder() {
        let mut records = scenario_table().records().to_vec();
        records.push(Record::from_values(2023, [Some(Decimal::ONE); 7]));
        let table = Table::from_records(records);

        let view = present(&table, &ChartCatalog::default(), 2022).unwrap();

        assert_eq!(
            view.summary,
            SummaryPanel::Unavailable {
                message: "No record found for year 2022".to_string()
            }
        );
        assert!(view.charts.iter().all(|chart| chart.len() == 2));
    }

    #[test]
    fn test_present_out_of_range() {
        let table = scenario_table();
        assert_eq!(
            present(&table, &ChartCatalog::default(), 2030),
            Err(PresentError::OutOfRange {
                year: 2030,
                min: 2020,
                max: 2021
            })
        );
        assert_eq!(
            present(&Table::default(), &ChartCatalog::default(), 2020),
            Err(PresentError::EmptyTable)
        );
    }

    #[test]
    fn test_year_options() {
        let options = year_options(&scenario_table());
        assert_eq!(options.years, vec![2020, 2021]);
        assert_eq!(options.default_year, Some(2021));
    }
}
