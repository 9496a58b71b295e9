//! Dashboard service: runs the presenter and owns the interactive year selection
//!
//! Every selection event gets a generation number. A finished recomputation is
//! published only when nothing newer has been published already, so the view
//! readers see always belongs to a single, most recent selection.

use serde::Serialize;
use shared::{
    build_summary, check_year, present, year_options, ChartCatalog, ChartDescriptor,
    DashboardView, Metric, PresentError, SummaryPanel, Table, YearOptions,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{AppError, AppResult};

/// Whether a requested selection is still being computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    Idle,
    Recomputing,
}

/// A published selection and the outputs computed for it
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub generation: u64,
    pub year: i32,
    pub view: DashboardView,
}

/// A selection event that has been accepted but not yet computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    pub generation: u64,
    pub year: i32,
}

/// Selection snapshot returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SelectionState {
    pub phase: SelectionPhase,
    pub generation: u64,
    pub year: i32,
    pub view: DashboardView,
}

/// Year summary for a single exact year
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub text: String,
}

pub struct DashboardService {
    table: Arc<Table>,
    catalog: Arc<ChartCatalog>,
    requested: AtomicU64,
    published: watch::Sender<Arc<Selection>>,
}

impl DashboardService {
    /// Create the service with the latest year selected
    pub fn new(table: Arc<Table>, catalog: Arc<ChartCatalog>) -> AppResult<Self> {
        let year = table.default_year().ok_or(AppError::EmptyTable)?;
        let view = present(&table, &catalog, year)?;
        let (published, _) = watch::channel(Arc::new(Selection {
            generation: 0,
            year,
            view,
        }));

        Ok(Self {
            table,
            catalog,
            requested: AtomicU64::new(0),
            published,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn year_options(&self) -> YearOptions {
        year_options(&self.table)
    }

    /// Stateless view for `year`, defaulting to the latest year
    pub fn view(&self, year: Option<i32>) -> AppResult<DashboardView> {
        let year = self.resolve_year(year)?;
        let view = present(&self.table, &self.catalog, year)?;
        log_placeholder(&view);
        Ok(view)
    }

    /// One metric's chart for `year`
    pub fn chart(&self, metric: Metric, year: Option<i32>) -> AppResult<ChartDescriptor> {
        let year = self.resolve_year(year)?;
        check_year(&self.table, year)?;
        let filtered = self.table.filter_up_to(year);
        Ok(ChartDescriptor::build(
            &filtered,
            metric,
            self.catalog.style(metric),
        ))
    }

    /// Summary line for exactly `year`; a missing row is an error here
    pub fn summary(&self, year: Option<i32>) -> AppResult<YearSummary> {
        let year = self.resolve_year(year)?;
        check_year(&self.table, year)?;
        let text = build_summary(&self.table, year)?;
        Ok(YearSummary { year, text })
    }

    /// Select `year` and return the state published afterwards
    pub fn select(&self, year: i32) -> AppResult<SelectionState> {
        let ticket = self.begin_selection(year)?;
        self.complete_selection(ticket)?;
        Ok(self.state())
    }

    /// Accept a selection event: `Idle -> Recomputing`
    pub fn begin_selection(&self, year: i32) -> AppResult<SelectionTicket> {
        check_year(&self.table, year)?;
        let generation = self.requested.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(year, generation, "Selection changed, recomputing");
        Ok(SelectionTicket { generation, year })
    }

    /// Compute the outputs for `ticket` and publish them unless superseded.
    ///
    /// Returns whether the result was published.
    pub fn complete_selection(&self, ticket: SelectionTicket) -> AppResult<bool> {
        let view = present(&self.table, &self.catalog, ticket.year)?;
        log_placeholder(&view);

        let selection = Arc::new(Selection {
            generation: ticket.generation,
            year: ticket.year,
            view,
        });

        let published = self.published.send_if_modified(|current| {
            if selection.generation > current.generation {
                *current = Arc::clone(&selection);
                true
            } else {
                false
            }
        });

        if published {
            tracing::debug!(
                year = ticket.year,
                generation = ticket.generation,
                "Selection published"
            );
        } else {
            tracing::debug!(
                year = ticket.year,
                generation = ticket.generation,
                "Discarding superseded selection"
            );
        }

        Ok(published)
    }

    /// Latest published selection
    pub fn current(&self) -> Arc<Selection> {
        Arc::clone(&self.published.borrow())
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.requested.load(Ordering::SeqCst) > self.current().generation {
            SelectionPhase::Recomputing
        } else {
            SelectionPhase::Idle
        }
    }

    pub fn state(&self) -> SelectionState {
        let current = self.current();
        SelectionState {
            phase: self.phase(),
            generation: current.generation,
            year: current.year,
            view: current.view.clone(),
        }
    }

    /// Receiver notified whenever a new selection is published
    pub fn subscribe(&self) -> watch::Receiver<Arc<Selection>> {
        self.published.subscribe()
    }

    fn resolve_year(&self, year: Option<i32>) -> AppResult<i32> {
        match year {
            Some(year) => Ok(year),
            None => self
                .table
                .default_year()
                .ok_or(AppError::from(PresentError::EmptyTable)),
        }
    }
}

fn log_placeholder(view: &DashboardView) {
    if let SummaryPanel::Unavailable { message } = &view.summary {
        tracing::warn!(year = view.selected_year, "Summary unavailable: {}", message);
    }
}
