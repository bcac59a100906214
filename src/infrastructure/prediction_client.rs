// Forecasting service client - one endpoint per site
use crate::application::data_sources::{PredictionSource, SourceError};
use crate::domain::prediction::{ForecastRequest, PredictionPoint, Site};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct PredictionServiceClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct PredictBody {
    room: u32,
    duration_hours: u32,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    prediction_result: Option<PredictionResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictionResult {
    #[serde(default)]
    predictions: Vec<PredictionPayload>,
}

#[derive(Debug, Deserialize)]
struct PredictionPayload {
    timestamp: String,
    temperature: f64,
    humidity: f64,
}

impl PredictionServiceClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, site: Site) -> String {
        match site {
            Site::Kebalen => format!("{}/predict-kebalen", self.base_url),
            Site::Gayungan => format!("{}/predict-gayungan", self.base_url),
        }
    }
}

fn into_points(response: PredictResponse) -> Option<Vec<PredictionPoint>> {
    if let Some(error) = &response.error {
        tracing::warn!(%error, "Prediction service reported an error");
    }

    response.prediction_result.map(|result| {
        result
            .predictions
            .into_iter()
            .map(|p| PredictionPoint {
                timestamp: p.timestamp,
                temperature: p.temperature,
                humidity: p.humidity,
            })
            .collect()
    })
}

#[async_trait]
impl PredictionSource for PredictionServiceClient {
    async fn predict(
        &self,
        request: &ForecastRequest,
    ) -> Result<Option<Vec<PredictionPoint>>, SourceError> {
        let url = self.endpoint(request.site);
        let body = PredictBody {
            room: request.room,
            duration_hours: request.duration_hours,
        };
        tracing::debug!(%url, ?body, "Requesting prediction");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status { status, body });
        }

        let data = response
            .json::<PredictResponse>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(into_points(data))
    }
}
