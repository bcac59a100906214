// Sensor reading domain models and the scalar readouts derived from them
use super::chart::format_time_label;
use std::str::FromStr;

/// Severity assigned by the query service to the latest temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Anomali,
    Normal,
    Minor,
    Major,
    Critical,
}

/// Colour for classifications outside the palette
pub const NEUTRAL_COLOR: &str = "#222";

impl Classification {
    pub fn color(&self) -> &'static str {
        match self {
            Classification::Anomali => "#666",
            Classification::Normal => "#2a9d2a",
            Classification::Minor => "#ff9f00",
            Classification::Major => "#ff6b00",
            Classification::Critical => "#e53935",
        }
    }
}

impl FromStr for Classification {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Anomali" => Ok(Classification::Anomali),
            "Normal" => Ok(Classification::Normal),
            "Minor" => Ok(Classification::Minor),
            "Major" => Ok(Classification::Major),
            "Critical" => Ok(Classification::Critical),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestReading {
    pub temperature: f64,
    pub humidity: f64,
    pub class: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Body of one dashboard-data answer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub latest: Option<LatestReading>,
    pub history: Vec<HistoryPoint>,
}

/// The three scalar displays of the live panel
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub temperature: String,
    pub humidity: String,
    pub class_label: String,
    pub class_color: &'static str,
    pub updated_at: String,
}

impl Default for Readout {
    fn default() -> Self {
        Self {
            temperature: "-- °C".to_string(),
            humidity: "-- %".to_string(),
            class_label: "--".to_string(),
            class_color: NEUTRAL_COLOR,
            updated_at: "--".to_string(),
        }
    }
}

impl Readout {
    pub fn from_latest(latest: &LatestReading) -> Self {
        let class_label = latest.class.clone().unwrap_or_else(|| "Normal".to_string());
        let class_color = class_label
            .parse::<Classification>()
            .map(|c| c.color())
            .unwrap_or(NEUTRAL_COLOR);

        Self {
            temperature: format!("{:.1} °C", latest.temperature),
            humidity: format!("{:.1} %", latest.humidity),
            class_label,
            class_color,
            updated_at: latest
                .timestamp
                .as_deref()
                .map(format_time_label)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latest(class: Option<&str>) -> LatestReading {
        LatestReading {
            temperature: 27.34,
            humidity: 58.06,
            class: class.map(str::to_string),
            timestamp: None,
        }
    }

    #[test]
    fn test_missing_class_reads_normal() {
        let readout = Readout::from_latest(&latest(None));
        assert_eq!(readout.class_label, "Normal");
        assert_eq!(readout.class_color, Classification::Normal.color());
        assert_eq!(readout.temperature, "27.3 °C");
        assert_eq!(readout.humidity, "58.1 %");
    }

    #[test]
    fn test_critical_color() {
        let readout = Readout::from_latest(&latest(Some("Critical")));
        assert_eq!(readout.class_label, "Critical");
        assert_eq!(readout.class_color, "#e53935");
        assert_eq!(readout.updated_at, "--");
    }

    #[test]
    fn test_unknown_class_is_neutral() {
        let readout = Readout::from_latest(&latest(Some("Severe")));
        assert_eq!(readout.class_label, "Severe");
        assert_eq!(readout.class_color, NEUTRAL_COLOR);
    }
}
