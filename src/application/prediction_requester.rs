// Prediction requester - drives the predict/hide button of the forecast panel
use crate::application::data_sources::PredictionSource;
use crate::application::session::{Activation, ActivationError, SharedSession};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictOutcome {
    Shown { points: usize },
    Hidden,
    /// The service answered without a prediction result
    NoResult,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PredictError {
    #[error(transparent)]
    Invalid(#[from] ActivationError),

    #[error("Failed to load prediction")]
    Failed,
}

#[derive(Clone)]
pub struct PredictionRequester {
    source: Arc<dyn PredictionSource>,
}

impl PredictionRequester {
    pub fn new(source: Arc<dyn PredictionSource>) -> Self {
        Self { source }
    }

    pub async fn activate(&self, session: &SharedSession) -> Result<PredictOutcome, PredictError> {
        let activation = session.lock().await.prediction.activate()?;
        let request = match activation {
            Activation::Hidden => return Ok(PredictOutcome::Hidden),
            Activation::Fetch(request) => request,
        };

        match self.source.predict(&request).await {
            Ok(Some(points)) => {
                session.lock().await.prediction.show(&points);
                tracing::info!(
                    site = %request.site,
                    room = request.room,
                    duration_hours = request.duration_hours,
                    points = points.len(),
                    "Prediction loaded"
                );
                Ok(PredictOutcome::Shown {
                    points: points.len(),
                })
            }
            Ok(None) => {
                tracing::warn!(
                    site = %request.site,
                    room = request.room,
                    "Prediction service answered without a result"
                );
                Ok(PredictOutcome::NoResult)
            }
            Err(e) => {
                tracing::error!(error = %e, site = %request.site, "Prediction request failed");
                Err(PredictError::Failed)
            }
        }
    }
}
