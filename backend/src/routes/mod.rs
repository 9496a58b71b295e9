//! Route definitions for the Agricultural Production Dashboard

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/years", get(handlers::list_years))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/charts/:metric", get(handlers::get_chart))
        .route("/summary", get(handlers::get_summary))
        .route(
            "/selection",
            get(handlers::get_selection).post(handlers::select_year),
        )
}
