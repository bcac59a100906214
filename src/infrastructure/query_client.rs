// Dashboard-data query service client
use crate::application::data_sources::{DashboardQuery, DashboardSource, SourceError};
use crate::domain::reading::{DashboardData, HistoryPoint, LatestReading};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct QueryServiceClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct DashboardDataResponse {
    #[serde(default)]
    latest: Option<LatestPayload>,
    #[serde(default)]
    history: Vec<HistoryPayload>,
}

#[derive(Debug, Deserialize)]
struct LatestPayload {
    temperature: Option<f64>,
    humidity: Option<f64>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

/// Database rows may carry null measurements
#[derive(Debug, Deserialize)]
struct HistoryPayload {
    timestamp: String,
    temperature: Option<f64>,
    humidity: Option<f64>,
}

impl From<DashboardDataResponse> for DashboardData {
    fn from(response: DashboardDataResponse) -> Self {
        // A latest reading without both measurements counts as no data
        let latest = response.latest.and_then(|l| {
            Some(LatestReading {
                temperature: l.temperature?,
                humidity: l.humidity?,
                class: l.class,
                timestamp: l.timestamp,
            })
        });

        let total = response.history.len();
        let history: Vec<HistoryPoint> = response
            .history
            .into_iter()
            .filter_map(|h| {
                Some(HistoryPoint {
                    temperature: h.temperature?,
                    humidity: h.humidity?,
                    timestamp: h.timestamp,
                })
            })
            .collect();

        if history.len() < total {
            tracing::debug!(
                skipped = total - history.len(),
                "Dropped history rows with missing measurements"
            );
        }

        Self { latest, history }
    }
}

impl QueryServiceClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, query: &DashboardQuery) -> String {
        format!(
            "{}/dashboard-data?location={}&room={}&sensor={}&points={}",
            self.base_url,
            urlencoding::encode(&query.location),
            urlencoding::encode(&query.room),
            urlencoding::encode(&query.sensor),
            query.points
        )
    }
}

#[async_trait]
impl DashboardSource for QueryServiceClient {
    async fn fetch_dashboard(&self, query: &DashboardQuery) -> Result<DashboardData, SourceError> {
        let url = self.build_url(query);
        tracing::debug!(%url, "Fetching dashboard data");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status { status, body });
        }

        let data = response
            .json::<DashboardDataResponse>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(data.into())
    }
}
