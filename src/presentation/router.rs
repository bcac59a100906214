// Route table of the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_view, health_check, navigate, refresh_live, select_live_location, select_live_room,
    select_live_sensor, select_prediction_duration, select_prediction_location,
    select_prediction_room, toggle_prediction,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/view", get(get_view))
        .route("/api/navigation", post(navigate))
        .route("/api/live/location", post(select_live_location))
        .route("/api/live/room", post(select_live_room))
        .route("/api/live/sensor", post(select_live_sensor))
        .route("/api/live/refresh", post(refresh_live))
        .route("/api/prediction/location", post(select_prediction_location))
        .route("/api/prediction/room", post(select_prediction_room))
        .route("/api/prediction/duration", post(select_prediction_duration))
        .route("/api/prediction/toggle", post(toggle_prediction))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
