// Dashboard session - UI state of one dashboard and the transitions driven by UI events
use crate::application::data_sources::DashboardQuery;
use crate::domain::chart::{ChartSeries, format_time_label};
use crate::domain::navigation::Navigation;
use crate::domain::prediction::{
    ForecastRequest, PanelToggle, PredictionPoint, ResultTable, Site, UnknownSite, room_index,
};
use crate::domain::reading::{DashboardData, Readout};
use crate::domain::selection::{LiveSelectors, PredictionSelectors, SelectionError};
use crate::domain::topology::Topology;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedSession = Arc<Mutex<DashboardSession>>;

/// Identifies one issued live fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Selection incomplete, nothing was requested
    Skipped,
    Failed,
    /// Answer had no latest reading
    NoData,
    /// A newer fetch was issued or applied before this one resolved
    Stale,
    Updated,
}

#[derive(Debug, Clone)]
pub struct LivePanel {
    pub selectors: LiveSelectors,
    pub readout: Readout,
    pub temperature_chart: ChartSeries,
    pub humidity_chart: ChartSeries,
    issued: u64,
    applied: u64,
}

impl LivePanel {
    fn new(topology: &Topology) -> Self {
        Self {
            selectors: LiveSelectors::new(topology),
            readout: Readout::default(),
            temperature_chart: ChartSeries::new("temperature", "Temp (°C)", "°C", "lime"),
            humidity_chart: ChartSeries::new("humidity", "Humidity (%)", "%", "salmon"),
            issued: 0,
            applied: 0,
        }
    }

    /// Query for the current selection, or `None` while it is incomplete
    pub fn begin_poll(&mut self, points: u32) -> Option<(DashboardQuery, PollTicket)> {
        let selection = self.selectors.selection()?;
        self.issued += 1;

        let query = DashboardQuery {
            location: selection.location,
            room: selection.room,
            sensor: selection.sensor,
            points,
        };
        Some((query, PollTicket(self.issued)))
    }

    pub fn apply(&mut self, ticket: PollTicket, data: DashboardData) -> PollOutcome {
        if ticket.0 <= self.applied {
            return PollOutcome::Stale;
        }
        self.applied = ticket.0;

        let Some(latest) = data.latest else {
            return PollOutcome::NoData;
        };
        self.readout = Readout::from_latest(&latest);

        let labels: Vec<String> = data
            .history
            .iter()
            .map(|h| format_time_label(&h.timestamp))
            .collect();
        let temperatures = data.history.iter().map(|h| h.temperature).collect();
        let humidities = data.history.iter().map(|h| h.humidity).collect();

        self.temperature_chart = self
            .temperature_chart
            .clone()
            .with_points(labels.clone(), temperatures);
        self.humidity_chart = self.humidity_chart.clone().with_points(labels, humidities);

        PollOutcome::Updated
    }

    /// Answers to fetches issued before this point are discarded
    fn invalidate_in_flight(&mut self) {
        self.applied = self.issued;
    }
}

/// Why the predict button could not start a request
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActivationError {
    #[error("Complete the selection first")]
    IncompleteSelection,

    #[error(transparent)]
    UnknownSite(#[from] UnknownSite),

    #[error("room '{0}' has no numeric index")]
    RoomIndex(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Hidden,
    Fetch(ForecastRequest),
}

#[derive(Debug, Clone)]
pub struct PredictionPanel {
    pub selectors: PredictionSelectors,
    pub temperature_chart: ChartSeries,
    pub humidity_chart: ChartSeries,
    pub table: ResultTable,
    pub toggle: PanelToggle,
}

impl PredictionPanel {
    fn new(topology: &Topology) -> Self {
        Self {
            selectors: PredictionSelectors::new(topology),
            temperature_chart: ChartSeries::new(
                "prediction-temperature",
                "Pred Temp (°C)",
                "°C",
                "#00e676",
            ),
            humidity_chart: ChartSeries::new(
                "prediction-humidity",
                "Pred Humidity (%)",
                "%",
                "#ff4081",
            ),
            table: ResultTable::default(),
            toggle: PanelToggle::Idle,
        }
    }

    /// Single handler of the predict/hide button.
    ///
    /// In the shown state it hides the panel without any request; otherwise it
    /// validates the selection and returns the request to send.
    pub fn activate(&mut self) -> Result<Activation, ActivationError> {
        if self.toggle == PanelToggle::Shown {
            self.toggle = PanelToggle::Idle;
            return Ok(Activation::Hidden);
        }

        let selection = self
            .selectors
            .selection()
            .ok_or(ActivationError::IncompleteSelection)?;
        let site = selection.location.parse::<Site>()?;
        let room = room_index(&selection.room)
            .ok_or_else(|| ActivationError::RoomIndex(selection.room.clone()))?;

        Ok(Activation::Fetch(ForecastRequest {
            site,
            room,
            duration_hours: selection.duration.hours(),
        }))
    }

    pub fn show(&mut self, points: &[PredictionPoint]) {
        let labels: Vec<String> = points
            .iter()
            .map(|p| format_time_label(&p.timestamp))
            .collect();
        let temperatures = points.iter().map(|p| p.temperature).collect();
        let humidities = points.iter().map(|p| p.humidity).collect();

        self.temperature_chart = self
            .temperature_chart
            .clone()
            .with_points(labels.clone(), temperatures);
        self.humidity_chart = self.humidity_chart.clone().with_points(labels, humidities);
        self.table = ResultTable::from_points(points);
        self.toggle = PanelToggle::Shown;
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    topology: Topology,
    pub navigation: Navigation,
    pub live: LivePanel,
    pub prediction: PredictionPanel,
}

impl DashboardSession {
    pub fn new(topology: Topology) -> Self {
        Self {
            navigation: Navigation::sidebar(),
            live: LivePanel::new(&topology),
            prediction: PredictionPanel::new(&topology),
            topology,
        }
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn select_live_location(&mut self, location: Option<&str>) -> Result<(), SelectionError> {
        self.live
            .selectors
            .on_location_changed(&self.topology, location)?;
        self.live.readout = Readout::default();
        self.live.invalidate_in_flight();
        Ok(())
    }

    /// Returns `true` when the sensor list is ready and a fetch should follow
    pub fn select_live_room(&mut self, room: Option<&str>) -> Result<bool, SelectionError> {
        let populated = self.live.selectors.on_room_changed(&self.topology, room)?;
        self.live.invalidate_in_flight();
        Ok(populated)
    }

    pub fn select_live_sensor(&mut self, sensor: Option<&str>) -> Result<(), SelectionError> {
        self.live.selectors.on_sensor_changed(sensor)?;
        self.live.invalidate_in_flight();
        Ok(())
    }

    pub fn select_prediction_location(
        &mut self,
        location: Option<&str>,
    ) -> Result<(), SelectionError> {
        self.prediction
            .selectors
            .on_location_changed(&self.topology, location)
    }

    pub fn select_prediction_room(&mut self, room: Option<&str>) -> Result<(), SelectionError> {
        self.prediction.selectors.on_room_changed(room)
    }

    pub fn select_prediction_duration(
        &mut self,
        hours: Option<&str>,
    ) -> Result<(), SelectionError> {
        self.prediction.selectors.on_duration_changed(hours)
    }

    pub fn navigate(&mut self, entry_id: &str) -> bool {
        self.navigation.select(entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::{HistoryPoint, LatestReading};

    fn sample_data(class: Option<&str>, history_len: usize) -> DashboardData {
        DashboardData {
            latest: Some(LatestReading {
                temperature: 24.56,
                humidity: 70.12,
                class: class.map(str::to_string),
                timestamp: None,
            }),
            history: (0..history_len)
                .map(|i| HistoryPoint {
                    timestamp: format!("2025-03-01T10:{:02}:00", i * 5),
                    temperature: 20.0 + i as f64,
                    humidity: 60.0 - i as f64,
                })
                .collect(),
        }
    }

    fn live_session() -> DashboardSession {
        let mut session = DashboardSession::new(Topology::builtin());
        session.select_live_location(Some("kebalen")).unwrap();
        assert!(session.select_live_room(Some("ROOM2")).unwrap());
        session
    }

    #[test]
    fn test_incomplete_selection_issues_nothing() {
        let mut session = DashboardSession::new(Topology::builtin());
        assert!(session.live.begin_poll(12).is_none());

        session.select_live_location(Some("kebalen")).unwrap();
        assert!(session.live.begin_poll(12).is_none());
    }

    #[test]
    fn test_apply_rebuilds_charts_in_order() {
        let mut session = live_session();
        let (query, ticket) = session.live.begin_poll(12).unwrap();
        assert_eq!(query.sensor, "ALL");
        assert_eq!(query.points, 12);

        let outcome = session.live.apply(ticket, sample_data(Some("Minor"), 4));

        assert_eq!(outcome, PollOutcome::Updated);
        let chart = &session.live.temperature_chart;
        assert_eq!(chart.labels, vec!["10:00", "10:05", "10:10", "10:15"]);
        assert_eq!(chart.values, vec![20.0, 21.0, 22.0, 23.0]);
        assert_eq!(session.live.humidity_chart.values, vec![60.0, 59.0, 58.0, 57.0]);
        assert_eq!(session.live.readout.temperature, "24.6 °C");
        assert_eq!(session.live.readout.class_color, "#ff9f00");
    }

    #[test]
    fn test_missing_latest_keeps_previous_view() {
        let mut session = live_session();
        let (_, ticket) = session.live.begin_poll(12).unwrap();
        session.live.apply(ticket, sample_data(None, 3));
        let before = session.live.readout.clone();

        let (_, ticket) = session.live.begin_poll(12).unwrap();
        let outcome = session.live.apply(ticket, DashboardData::default());

        assert_eq!(outcome, PollOutcome::NoData);
        assert_eq!(session.live.readout, before);
        assert_eq!(session.live.temperature_chart.values.len(), 3);
    }

    #[test]
    fn test_out_of_order_answer_is_discarded() {
        let mut session = live_session();
        let (_, first) = session.live.begin_poll(12).unwrap();
        let (_, second) = session.live.begin_poll(12).unwrap();

        assert_eq!(
            session.live.apply(second, sample_data(Some("Major"), 2)),
            PollOutcome::Updated
        );
        assert_eq!(
            session.live.apply(first, sample_data(Some("Normal"), 5)),
            PollOutcome::Stale
        );
        assert_eq!(session.live.readout.class_label, "Major");
        assert_eq!(session.live.temperature_chart.values.len(), 2);
    }

    #[test]
    fn test_location_change_resets_readout_and_drops_in_flight() {
        let mut session = live_session();
        let (_, ticket) = session.live.begin_poll(12).unwrap();

        session.select_live_location(Some("gayungan")).unwrap();

        assert_eq!(session.live.readout, Readout::default());
        assert_eq!(
            session.live.apply(ticket, sample_data(None, 1)),
            PollOutcome::Stale
        );
        assert!(session.live.selectors.selection().is_none());
    }

    #[test]
    fn test_predict_requires_full_selection() {
        let mut session = DashboardSession::new(Topology::builtin());
        session.select_prediction_location(Some("kebalen")).unwrap();
        session.select_prediction_room(Some("ROOM2")).unwrap();

        assert_eq!(
            session.prediction.activate(),
            Err(ActivationError::IncompleteSelection)
        );
        assert_eq!(session.prediction.toggle, PanelToggle::Idle);
    }

    #[test]
    fn test_toggle_cycle() {
        let mut session = DashboardSession::new(Topology::builtin());
        session.select_prediction_location(Some("gayungan")).unwrap();
        session.select_prediction_room(Some("ROOM4")).unwrap();
        session.select_prediction_duration(Some("3")).unwrap();

        let activation = session.prediction.activate().unwrap();
        assert_eq!(
            activation,
            Activation::Fetch(ForecastRequest {
                site: Site::Gayungan,
                room: 4,
                duration_hours: 3,
            })
        );

        session.prediction.show(&[PredictionPoint {
            timestamp: "2025-03-01T11:00:00".to_string(),
            temperature: 25.0,
            humidity: 65.0,
        }]);
        assert_eq!(session.prediction.toggle.label(), "Hide Prediction");
        assert!(session.prediction.toggle.panel_visible());
        assert_eq!(session.prediction.table.rows.len(), 1);

        assert_eq!(session.prediction.activate().unwrap(), Activation::Hidden);
        assert_eq!(session.prediction.toggle.label(), "Predict");
        assert!(!session.prediction.toggle.panel_visible());
    }
}
