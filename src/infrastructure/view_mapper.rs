// Mapper from session state to the JSON view consumed by the chart front-end
use crate::application::session::{DashboardSession, LivePanel, PredictionPanel};
use crate::domain::chart::ChartSeries;
use crate::domain::navigation::Navigation;
use crate::domain::prediction::TableRow;
use crate::domain::selection::Selector;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub navigation: NavigationView,
    pub live: LiveView,
    pub prediction: PredictionView,
}

#[derive(Debug, Serialize)]
pub struct NavigationView {
    pub active_section: &'static str,
    pub entries: Vec<NavEntryView>,
}

#[derive(Debug, Serialize)]
pub struct NavEntryView {
    pub id: &'static str,
    pub label: &'static str,
    pub target: &'static str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectorView {
    pub placeholder: &'static str,
    pub selected: Option<String>,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct ReadoutView {
    pub temperature: String,
    pub humidity: String,
    pub class_label: String,
    pub class_color: &'static str,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct ChartView {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub color: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub revision: u64,
}

#[derive(Debug, Serialize)]
pub struct LiveView {
    pub location: SelectorView,
    pub room: SelectorView,
    pub sensor: SelectorView,
    pub readout: ReadoutView,
    pub charts: Vec<ChartView>,
}

#[derive(Debug, Serialize)]
pub struct TableRowView {
    pub time: String,
    pub temperature: String,
    pub humidity: String,
}

#[derive(Debug, Serialize)]
pub struct PredictionView {
    pub location: SelectorView,
    pub room: SelectorView,
    pub duration: SelectorView,
    pub button_label: &'static str,
    pub result_visible: bool,
    pub charts: Vec<ChartView>,
    pub table: Vec<TableRowView>,
}

pub fn session_to_view(session: &DashboardSession) -> SessionView {
    SessionView {
        navigation: navigation_to_view(&session.navigation),
        live: live_to_view(&session.live),
        prediction: prediction_to_view(&session.prediction),
    }
}

fn navigation_to_view(navigation: &Navigation) -> NavigationView {
    NavigationView {
        active_section: navigation.active_section(),
        entries: navigation
            .entries()
            .iter()
            .map(|e| NavEntryView {
                id: e.id,
                label: e.label,
                target: e.target,
                active: navigation.is_active(e.id),
            })
            .collect(),
    }
}

fn selector_to_view(selector: &Selector) -> SelectorView {
    SelectorView {
        placeholder: selector.placeholder(),
        selected: selector.selected().map(str::to_string),
        options: selector
            .options()
            .iter()
            .map(|o| OptionView {
                value: o.value.clone(),
                label: o.label.clone(),
            })
            .collect(),
    }
}

fn chart_to_view(chart: &ChartSeries) -> ChartView {
    ChartView {
        id: chart.id.clone(),
        title: chart.title.clone(),
        unit: chart.unit.clone(),
        color: chart.color.clone(),
        labels: chart.labels.clone(),
        values: chart.values.clone(),
        revision: chart.revision,
    }
}

fn live_to_view(live: &LivePanel) -> LiveView {
    LiveView {
        location: selector_to_view(&live.selectors.location),
        room: selector_to_view(&live.selectors.room),
        sensor: selector_to_view(&live.selectors.sensor),
        readout: ReadoutView {
            temperature: live.readout.temperature.clone(),
            humidity: live.readout.humidity.clone(),
            class_label: live.readout.class_label.clone(),
            class_color: live.readout.class_color,
            updated_at: live.readout.updated_at.clone(),
        },
        charts: vec![
            chart_to_view(&live.temperature_chart),
            chart_to_view(&live.humidity_chart),
        ],
    }
}

fn row_to_view(row: &TableRow) -> TableRowView {
    TableRowView {
        time: row.time.clone(),
        temperature: row.temperature.clone(),
        humidity: row.humidity.clone(),
    }
}

fn prediction_to_view(prediction: &PredictionPanel) -> PredictionView {
    PredictionView {
        location: selector_to_view(&prediction.selectors.location),
        room: selector_to_view(&prediction.selectors.room),
        duration: selector_to_view(&prediction.selectors.duration),
        button_label: prediction.toggle.label(),
        result_visible: prediction.toggle.panel_visible(),
        charts: vec![
            chart_to_view(&prediction.temperature_chart),
            chart_to_view(&prediction.humidity_chart),
        ],
        table: prediction.table.rows.iter().map(row_to_view).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topology::Topology;

    #[test]
    fn test_initial_view() {
        let session = DashboardSession::new(Topology::builtin());
        let view = serde_json::to_value(session_to_view(&session)).unwrap();

        assert_eq!(view["navigation"]["active_section"], "dashboard");
        assert_eq!(view["live"]["readout"]["temperature"], "-- °C");
        assert_eq!(view["live"]["room"]["placeholder"], "Select Room");
        assert_eq!(view["live"]["location"]["options"].as_array().unwrap().len(), 2);
        assert_eq!(view["prediction"]["button_label"], "Predict");
        assert_eq!(view["prediction"]["result_visible"], false);
        assert_eq!(view["prediction"]["duration"]["options"][0]["value"], "1");
    }

    #[test]
    fn test_sensor_options_after_room() {
        let mut session = DashboardSession::new(Topology::builtin());
        session.select_live_location(Some("kebalen")).unwrap();
        session.select_live_room(Some("ROOM2")).unwrap();

        let view = serde_json::to_value(session_to_view(&session)).unwrap();
        let values: Vec<&str> = view["live"]["sensor"]["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["value"].as_str().unwrap())
            .collect();

        assert_eq!(values, vec!["ALL", "DHT5", "DHT6"]);
        assert_eq!(view["live"]["sensor"]["selected"], "ALL");
    }
}
