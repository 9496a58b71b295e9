//! HTTP API integration tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.

use agri_dashboard_backend::{create_app, AppState, Config, DashboardService};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use shared::{ChartCatalog, Record, Table};
use std::sync::Arc;
use tower::ServiceExt;

fn record(year: i32, production: i64, rainfall: i64, avg_temp: i64) -> Record {
    let mut record = Record::from_values(year, [Some(Decimal::ONE); 7]);
    record.production = Some(Decimal::from(production));
    record.rainfall = Some(Decimal::from(rainfall));
    record.avg_temp = Some(Decimal::from(avg_temp));
    record
}

/// 2019, 2020 and 2022: 2021 is a gap inside the span
fn test_app() -> Router {
    let table = Table::from_records(vec![
        record(2019, 90, 820, 24),
        record(2020, 100, 800, 25),
        record(2022, 120, 700, 27),
    ]);
    let dashboard =
        DashboardService::new(Arc::new(table), Arc::new(ChartCatalog::default())).unwrap();

    create_app(AppState {
        dashboard: Arc::new(dashboard),
        config: Arc::new(Config::default()),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn chart_years(chart: &Value) -> Vec<i64> {
    chart["x"]
        .as_array()
        .unwrap()
        .iter()
        .map(|year| year.as_i64().unwrap())
        .collect()
}

// ============================================================================
// Read-only endpoints
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["records"], 3);
    assert_eq!(body["years"], 3);
}

#[tokio::test]
async fn test_index_serves_page() {
    let app = test_app();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Agricultural Production Dashboard"));
    assert!(page.contains("Last Year Data"));
    // Each page load renders its own view from the default year
    assert!(page.contains("/dashboard?year="));
    assert!(!page.contains("/selection"));
}

#[tokio::test]
async fn test_years() {
    let (status, body) = get(test_app(), "/api/v1/years").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "years": [2019, 2020, 2022], "default_year": 2022 }));
}

#[tokio::test]
async fn test_dashboard_defaults_to_latest_year() {
    let (status, body) = get(test_app(), "/api/v1/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_year"], 2022);

    let charts = body["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 7);
    for chart in charts {
        assert_eq!(chart_years(chart), vec![2019, 2020, 2022]);
    }
    assert_eq!(charts[0]["title"], "Production vs Year");
    assert_eq!(charts[0]["color"], "blue");
    assert_eq!(charts[4]["y_label"], "Area (Hectares)");

    assert_eq!(body["summary"]["status"], "available");
    assert_eq!(
        body["summary"]["text"],
        "Production: 120 | Rainfall: 700 | Avg Temp: 27"
    );
}

#[tokio::test]
async fn test_dashboard_gap_year_keeps_charts() {
    let (status, body) = get(test_app(), "/api/v1/dashboard?year=2021").await;

    assert_eq!(status, StatusCode::OK);
    for chart in body["charts"].as_array().unwrap() {
        assert_eq!(chart_years(chart), vec![2019, 2020]);
    }
    assert_eq!(body["summary"]["status"], "unavailable");
    assert_eq!(body["summary"]["message"], "No record found for year 2021");
}

#[tokio::test]
async fn test_dashboard_year_out_of_range() {
    let (status, body) = get(test_app(), "/api/v1/dashboard?year=1990").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "YEAR_OUT_OF_RANGE");
    assert_eq!(body["error"]["field"], "year");
}

#[tokio::test]
async fn test_dashboard_invalid_year_query() {
    let (status, body) = get(test_app(), "/api/v1/dashboard?year=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "YEAR_INVALID");
    assert_eq!(body["error"]["field"], "year");

    let (status, body) = get(test_app(), "/api/v1/charts/yield?year=20x1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "YEAR_INVALID");
}

#[tokio::test]
async fn test_single_chart() {
    let (status, body) = get(test_app(), "/api/v1/charts/rainfall?year=2020").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metric"], "rainfall");
    assert_eq!(body["title"], "Rainfall vs Year");
    assert_eq!(body["x_label"], "Year");
    assert_eq!(chart_years(&body), vec![2019, 2020]);
}

#[tokio::test]
async fn test_unknown_chart() {
    let (status, body) = get(test_app(), "/api/v1/charts/humidity").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "UNKNOWN_METRIC");
}

#[tokio::test]
async fn test_summary() {
    let (status, body) = get(test_app(), "/api/v1/summary?year=2020").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "year": 2020, "text": "Production: 100 | Rainfall: 800 | Avg Temp: 25" })
    );
}

#[tokio::test]
async fn test_summary_gap_year_not_found() {
    let (status, body) = get(test_app(), "/api/v1/summary?year=2021").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "EXACT_MATCH_NOT_FOUND");
    assert_eq!(body["error"]["message"], "No record found for year 2021");
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_initial_selection() {
    let (status, body) = get(test_app(), "/api/v1/selection").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["year"], 2022);
    assert_eq!(body["generation"], 0);
}

#[tokio::test]
async fn test_select_year() {
    let app = test_app();

    let (status, body) = post_json(app.clone(), "/api/v1/selection", json!({ "year": 2020 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2020);
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["generation"], 1);
    assert_eq!(chart_years(&body["view"]["charts"][0]), vec![2019, 2020]);

    let (_, current) = get(app, "/api/v1/selection").await;
    assert_eq!(current["year"], 2020);
}

#[tokio::test]
async fn test_select_year_out_of_range_keeps_selection() {
    let app = test_app();

    let (status, body) = post_json(app.clone(), "/api/v1/selection", json!({ "year": 2030 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "YEAR_OUT_OF_RANGE");

    let (_, current) = get(app, "/api/v1/selection").await;
    assert_eq!(current["year"], 2022);
    assert_eq!(current["phase"], "idle");
}

#[tokio::test]
async fn test_new_client_starts_at_latest_year_after_another_selects() {
    let app = test_app();

    let (status, _) = post_json(app.clone(), "/api/v1/selection", json!({ "year": 2019 })).await;
    assert_eq!(status, StatusCode::OK);

    // What a freshly loaded page requests
    let (_, years) = get(app.clone(), "/api/v1/years").await;
    assert_eq!(years["default_year"], 2022);

    let (status, view) = get(app, "/api/v1/dashboard?year=2022").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["selected_year"], 2022);
    assert_eq!(chart_years(&view["charts"][0]), vec![2019, 2020, 2022]);
}
