// Chart dataset models
use chrono::{DateTime, NaiveDateTime};

/// One line chart: parallel label/value arrays handed to the chart sink
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub color: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Bumped on every data replacement so the sink knows to redraw
    pub revision: u64,
}

impl ChartSeries {
    pub fn new(id: &str, title: &str, unit: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            color: color.to_string(),
            labels: Vec::new(),
            values: Vec::new(),
            revision: 0,
        }
    }

    /// Next chart state with all points replaced; nothing is appended or kept
    pub fn with_points(self, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            revision: self.revision + 1,
            ..self
        }
    }
}

/// Renders a timestamp as a short `HH:MM` axis label.
///
/// Accepts RFC 3339 as well as the naive ISO form the sensor database emits;
/// anything else is passed through untouched.
pub fn format_time_label(timestamp: &str) -> String {
    if let Ok(time) = DateTime::parse_from_rfc3339(timestamp) {
        return time.format("%H:%M").to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(timestamp, pattern) {
            return time.format("%H:%M").to_string();
        }
    }

    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_points_replaces_everything() {
        let chart = ChartSeries::new("temperature", "Temp", "°C", "lime")
            .with_points(vec!["10:00".into(), "10:05".into()], vec![24.0, 24.5]);
        let chart = chart.with_points(vec!["10:10".into()], vec![25.0]);

        assert_eq!(chart.labels, vec!["10:10"]);
        assert_eq!(chart.values, vec![25.0]);
        assert_eq!(chart.revision, 2);
        assert_eq!(chart.title, "Temp");
    }

    #[test]
    fn test_format_time_label() {
        assert_eq!(format_time_label("2025-03-01T08:15:00"), "08:15");
        assert_eq!(format_time_label("2025-03-01T08:15:42.123"), "08:15");
        assert_eq!(format_time_label("2025-03-01 21:40:00"), "21:40");
        assert_eq!(format_time_label("2025-03-01T08:15:00+07:00"), "08:15");
        assert_eq!(format_time_label("yesterday"), "yesterday");
    }
}
