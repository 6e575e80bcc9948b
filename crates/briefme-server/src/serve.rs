use crate::config::BriefMeConfig;
use crate::http::{self, AppState};
use briefme_core::{DashboardSource, DashboardStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn run(config: BriefMeConfig) -> anyhow::Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        anyhow::bail!("Invalid configuration: {}", errors.join("; "));
    }

    info!("Starting Brief Me server v{}", env!("CARGO_PKG_VERSION"));

    let store = DashboardStore::new(DashboardSource::sample(), config.dashboard_config());
    info!(
        "Dashboard loaded: {} briefs, {} meetings, {} follow-ups",
        store.briefs_data().all_briefs.len(),
        store.meetings().len(),
        store.briefs_data().follow_ups.len()
    );

    let state = AppState::new(store, config.render.clone());
    let app = http::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(config.server.http_addr).await?;
    info!("HTTP server listening on {}", config.server.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
