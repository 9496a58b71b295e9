//! Complete set of dashboard outputs for one selected year

use serde::Serialize;

use super::{ChartDescriptor, Record, SummaryPanel};

/// The eight outputs produced by one recomputation, plus the filtered rows they came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selected_year: i32,
    pub records: Vec<Record>,
    pub charts: [ChartDescriptor; 7],
    pub summary: SummaryPanel,
}

/// Selector options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOptions {
    pub years: Vec<i32>,
    pub default_year: Option<i32>,
}
