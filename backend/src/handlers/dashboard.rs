//! Read-only dashboard handlers
//!
//! These compute outputs for the year given in the query string and never
//! touch the shared selection.

use axum::{
    extract::{FromRequestParts, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::Metric;

use crate::error::AppError;
use crate::AppState;

/// Optional `?year=` filter; the latest year when absent
#[derive(Debug, Default, Deserialize, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct YearQuery {
    pub year: Option<i32>,
}

/// List the selectable years
pub async fn list_years(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.year_options())
}

/// All eight outputs for one year
pub async fn get_dashboard(
    State(state): State<AppState>,
    query: YearQuery,
) -> impl IntoResponse {
    match state.dashboard.view(query.year) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// A single metric chart
pub async fn get_chart(
    State(state): State<AppState>,
    Path(metric): Path<String>,
    query: YearQuery,
) -> impl IntoResponse {
    let metric = match metric.parse::<Metric>() {
        Ok(metric) => metric,
        Err(_) => return AppError::UnknownMetric(metric).into_response(),
    };

    match state.dashboard.chart(metric, query.year) {
        Ok(chart) => (StatusCode::OK, Json(chart)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Summary line for exactly one year
pub async fn get_summary(
    State(state): State<AppState>,
    query: YearQuery,
) -> impl IntoResponse {
    match state.dashboard.summary(query.year) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => e.into_response(),
    }
}
