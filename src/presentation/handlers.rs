// HTTP request handlers - one per UI event
use crate::application::prediction_requester::PredictOutcome;
use crate::infrastructure::view_mapper::{SessionView, session_to_view};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// New value of a selector; absent or null means back to the placeholder
#[derive(Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub entry: String,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub notice: Option<&'static str>,
    /// Number of forecast points just loaded, absent when nothing was fetched
    pub predicted_points: Option<usize>,
    pub view: SessionView,
}

async fn current_view(state: &AppState) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session_to_view(&session))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<SessionView> {
    current_view(&state).await
}

pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<SessionView>, ApiError> {
    if !state.session.lock().await.navigate(&request.entry) {
        return Err(ApiError::BadRequest(format!(
            "unknown navigation entry '{}'",
            request.entry
        )));
    }
    Ok(current_view(&state).await)
}

pub async fn select_live_location(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .session
        .lock()
        .await
        .select_live_location(request.value.as_deref())?;
    Ok(current_view(&state).await)
}

/// Repopulates the sensor list and fetches as soon as it is ready
pub async fn select_live_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    let populated = state
        .session
        .lock()
        .await
        .select_live_room(request.value.as_deref())?;

    if populated {
        state.live_poller.poll(&state.session).await;
    }
    Ok(current_view(&state).await)
}

pub async fn select_live_sensor(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .session
        .lock()
        .await
        .select_live_sensor(request.value.as_deref())?;

    state.live_poller.poll(&state.session).await;
    Ok(current_view(&state).await)
}

pub async fn refresh_live(State(state): State<Arc<AppState>>) -> Json<SessionView> {
    state.live_poller.poll(&state.session).await;
    current_view(&state).await
}

pub async fn select_prediction_location(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .session
        .lock()
        .await
        .select_prediction_location(request.value.as_deref())?;
    Ok(current_view(&state).await)
}

pub async fn select_prediction_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .session
        .lock()
        .await
        .select_prediction_room(request.value.as_deref())?;
    Ok(current_view(&state).await)
}

pub async fn select_prediction_duration(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .session
        .lock()
        .await
        .select_prediction_duration(request.value.as_deref())?;
    Ok(current_view(&state).await)
}

/// Predict/hide button
pub async fn toggle_prediction(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let outcome = state
        .prediction_requester
        .activate(&state.session)
        .await?;

    let (notice, predicted_points) = match outcome {
        PredictOutcome::NoResult => (Some("No prediction available for this room"), None),
        PredictOutcome::Shown { points } => (None, Some(points)),
        PredictOutcome::Hidden => (None, None),
    };

    let Json(view) = current_view(&state).await;
    Ok(Json(ToggleResponse {
        notice,
        predicted_points,
        view,
    }))
}
