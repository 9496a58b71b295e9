//! Business logic services for the Agricultural Production Dashboard

pub mod dashboard;

pub use dashboard::{
    DashboardService, Selection, SelectionPhase, SelectionState, SelectionTicket, YearSummary,
};
