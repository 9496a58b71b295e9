//! Chart styling catalog and per-metric chart descriptors

use rust_decimal::Decimal;
use serde::Serialize;

use super::{FilteredView, Metric};

/// Fixed presentation constants for one metric's chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Line and marker color, as a CSS color name
    pub color: String,
}

impl ChartStyle {
    pub fn new(title: &str, y_label: &str, color: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "Year".to_string(),
            y_label: y_label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Immutable metric-to-style table handed to the presenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartCatalog {
    styles: [ChartStyle; 7],
}

impl ChartCatalog {
    pub fn new(styles: [ChartStyle; 7]) -> Self {
        Self { styles }
    }

    pub fn style(&self, metric: Metric) -> &ChartStyle {
        &self.styles[metric.index()]
    }
}

impl Default for ChartCatalog {
    fn default() -> Self {
        Self::new([
            ChartStyle::new("Production vs Year", "Production (Million Tons)", "blue"),
            ChartStyle::new("Yield vs Year", "Yield (Tons per Hectare)", "green"),
            ChartStyle::new("Rainfall vs Year", "Rainfall (mm)", "orange"),
            ChartStyle::new("Average Temperature vs Year", "Avg Temp (°C)", "red"),
            ChartStyle::new("Area Harvested vs Year", "Area (Hectares)", "purple"),
            ChartStyle::new("Avg Min Temp vs Year", "Avg Min Temp (°C)", "cyan"),
            ChartStyle::new("Avg Max Temp vs Year", "Avg Max Temp (°C)", "magenta"),
        ])
    }
}

/// Everything the front end needs to draw one metric's line chart.
///
/// `x` and `y` always have the same length and follow year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescriptor {
    pub metric: Metric,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    pub x: Vec<i32>,
    pub y: Vec<Option<Decimal>>,
}

impl ChartDescriptor {
    pub fn build(view: &FilteredView<'_>, metric: Metric, style: &ChartStyle) -> Self {
        Self {
            metric,
            title: style.title.clone(),
            x_label: style.x_label.clone(),
            y_label: style.y_label.clone(),
            color: style.color.clone(),
            x: view.years(),
            y: view.values(metric),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(year, value)` pairs in year order
    pub fn points(&self) -> impl Iterator<Item = (i32, Option<Decimal>)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
