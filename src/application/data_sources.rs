// Collaborator traits for the query and forecasting services
use crate::domain::prediction::{ForecastRequest, PredictionPoint};
use crate::domain::reading::DashboardData;
use async_trait::async_trait;

/// Parameters of one dashboard-data fetch
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardQuery {
    pub location: String,
    pub room: String,
    pub sensor: String,
    pub points: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Latest reading plus recent history for one selection
    async fn fetch_dashboard(&self, query: &DashboardQuery) -> Result<DashboardData, SourceError>;
}

#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Forecast points, or `None` when the answer carries no prediction result
    async fn predict(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<Vec<PredictionPoint>>, SourceError>;
}
