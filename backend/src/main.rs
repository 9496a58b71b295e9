//! Agricultural Production Dashboard - Backend Server

use agri_dashboard_backend::{create_app, ingest, AppState, Config, DashboardService};
use anyhow::Context;
use shared::ChartCatalog;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "agri_server=debug,agri_dashboard_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Agricultural Production Dashboard");
    tracing::info!("Environment: {}", config.environment);

    // A table that cannot be loaded is fatal
    let table = ingest::load_table(&config.data.path, config.data.sheet.as_deref())
        .with_context(|| format!("failed to load {}", config.data.path.display()))?;

    let dashboard = DashboardService::new(Arc::new(table), Arc::new(ChartCatalog::default()))?;

    let addr = config.socket_addr()?;

    // Create application state
    let state = AppState {
        dashboard: Arc::new(dashboard),
        config: Arc::new(config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
