//! Interactive year selection handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectYearInput {
    pub year: i32,
}

/// Current selection and its outputs
pub async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.state())
}

/// Change the selected year
pub async fn select_year(
    State(state): State<AppState>,
    Json(input): Json<SelectYearInput>,
) -> impl IntoResponse {
    let dashboard = state.dashboard.clone();

    // Recomputation is CPU-bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || dashboard.select(input.year)).await;

    match result {
        Ok(Ok(selection)) => (StatusCode::OK, Json(selection)).into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            tracing::error!("Selection task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
