// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::live_poller::LivePoller;
use crate::application::poll_scheduler::run_live_polling;
use crate::application::prediction_requester::PredictionRequester;
use crate::application::session::DashboardSession;
use crate::domain::topology::Topology;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::prediction_client::PredictionServiceClient;
use crate::infrastructure::query_client::QueryServiceClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create service clients (infrastructure layer)
    let http_client = reqwest::Client::new();
    let query_client = Arc::new(QueryServiceClient::new(
        http_client.clone(),
        config.query_service.base_url.clone(),
    ));
    let prediction_client = Arc::new(PredictionServiceClient::new(
        http_client,
        config.prediction_service.base_url.clone(),
    ));

    // Create session and use cases (application layer)
    let session = DashboardSession::new(Topology::builtin()).shared();
    let live_poller = LivePoller::new(query_client, config.query_service.history_points);
    let prediction_requester = PredictionRequester::new(prediction_client);

    tokio::spawn(run_live_polling(
        live_poller.clone(),
        session.clone(),
        config.polling.interval_seconds,
    ));

    let state = Arc::new(AppState {
        session,
        live_poller,
        prediction_requester,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!(
        %addr,
        query_service = %config.query_service.base_url,
        prediction_service = %config.prediction_service.base_url,
        "Starting room-climate dashboard"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
