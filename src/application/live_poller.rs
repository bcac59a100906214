// Live readout poller - fetches the latest reading and history for the live selection
use crate::application::data_sources::DashboardSource;
use crate::application::session::{PollOutcome, SharedSession};
use std::sync::Arc;

#[derive(Clone)]
pub struct LivePoller {
    source: Arc<dyn DashboardSource>,
    history_points: u32,
}

impl LivePoller {
    pub fn new(source: Arc<dyn DashboardSource>, history_points: u32) -> Self {
        Self {
            source,
            history_points,
        }
    }

    /// One fetch-and-render cycle.
    ///
    /// The session lock is released while the request is in flight, so
    /// concurrent triggers each issue their own request.
    pub async fn poll(&self, session: &SharedSession) -> PollOutcome {
        let issued = {
            let mut session = session.lock().await;
            session.live.begin_poll(self.history_points)
        };
        let Some((query, ticket)) = issued else {
            return PollOutcome::Skipped;
        };

        match self.source.fetch_dashboard(&query).await {
            Ok(data) => {
                let outcome = session.lock().await.live.apply(ticket, data);
                tracing::debug!(
                    location = %query.location,
                    room = %query.room,
                    sensor = %query.sensor,
                    ?outcome,
                    "Live poll finished"
                );
                outcome
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    location = %query.location,
                    room = %query.room,
                    sensor = %query.sensor,
                    "Dashboard fetch failed"
                );
                PollOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data_sources::{DashboardQuery, SourceError};
    use crate::application::session::DashboardSession;
    use crate::domain::reading::{DashboardData, HistoryPoint, LatestReading};
    use crate::domain::topology::Topology;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeQueryService {
        calls: Mutex<Vec<DashboardQuery>>,
        fail: bool,
    }

    #[async_trait]
    impl DashboardSource for FakeQueryService {
        async fn fetch_dashboard(
            &self,
            query: &DashboardQuery,
        ) -> Result<DashboardData, SourceError> {
            self.calls.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(SourceError::Status {
                    status: 500,
                    body: "DB connection failed".to_string(),
                });
            }
            Ok(DashboardData {
                latest: Some(LatestReading {
                    temperature: 31.0,
                    humidity: 55.0,
                    class: Some("Critical".to_string()),
                    timestamp: Some("2025-03-01T10:10:00".to_string()),
                }),
                history: vec![
                    HistoryPoint {
                        timestamp: "2025-03-01T10:05:00".to_string(),
                        temperature: 30.5,
                        humidity: 56.0,
                    },
                    HistoryPoint {
                        timestamp: "2025-03-01T10:10:00".to_string(),
                        temperature: 31.0,
                        humidity: 55.0,
                    },
                ],
            })
        }
    }

    fn session_with_room() -> SharedSession {
        let mut session = DashboardSession::new(Topology::builtin());
        session.select_live_location(Some("gayungan")).unwrap();
        session.select_live_room(Some("ROOM1")).unwrap();
        session.shared()
    }

    #[tokio::test]
    async fn test_incomplete_selection_makes_no_call() {
        let source = Arc::new(FakeQueryService::default());
        let poller = LivePoller::new(source.clone(), 12);
        let session = DashboardSession::new(Topology::builtin()).shared();

        assert_eq!(poller.poll(&session).await, PollOutcome::Skipped);
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_poll_renders_answer() {
        let source = Arc::new(FakeQueryService::default());
        let poller = LivePoller::new(source.clone(), 12);
        let session = session_with_room();

        assert_eq!(poller.poll(&session).await, PollOutcome::Updated);

        let calls = source.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![DashboardQuery {
                location: "gayungan".to_string(),
                room: "ROOM1".to_string(),
                sensor: "ALL".to_string(),
                points: 12,
            }]
        );

        let session = session.lock().await;
        assert_eq!(session.live.readout.class_color, "#e53935");
        assert_eq!(session.live.temperature_chart.labels, vec!["10:05", "10:10"]);
    }

    #[tokio::test]
    async fn test_failure_leaves_view_untouched() {
        let source = Arc::new(FakeQueryService {
            fail: true,
            ..Default::default()
        });
        let poller = LivePoller::new(source, 12);
        let session = session_with_room();

        assert_eq!(poller.poll(&session).await, PollOutcome::Failed);

        let session = session.lock().await;
        assert_eq!(session.live.readout.temperature, "-- °C");
        assert!(session.live.temperature_chart.labels.is_empty());
        assert_eq!(session.live.temperature_chart.revision, 0);
    }
}
