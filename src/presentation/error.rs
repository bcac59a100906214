// API errors and their HTTP mapping
use crate::application::prediction_requester::PredictError;
use crate::domain::selection::SelectionError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Shown to the user as a blocking alert
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),
}

impl From<SelectionError> for ApiError {
    fn from(e: SelectionError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<PredictError> for ApiError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::Invalid(invalid) => Self::Validation(invalid.to_string()),
            PredictError::Failed => Self::Upstream(PredictError::Failed.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
