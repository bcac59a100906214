// Forecast domain models
use super::chart::format_time_label;
use std::fmt;
use std::str::FromStr;

/// Forecast horizon offered by the duration selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionDuration(u32);

impl PredictionDuration {
    pub const ALL: [PredictionDuration; 5] = [
        PredictionDuration(1),
        PredictionDuration(3),
        PredictionDuration(6),
        PredictionDuration(12),
        PredictionDuration(24),
    ];

    pub fn from_hours(hours: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.0 == hours)
    }

    pub fn hours(&self) -> u32 {
        self.0
    }

    pub fn label(&self) -> String {
        match self.0 {
            1 => "1 hour".to_string(),
            n => format!("{} hours", n),
        }
    }
}

/// Sites served by a prediction endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Kebalen,
    Gayungan,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Kebalen => "kebalen",
            Site::Gayungan => "gayungan",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("no prediction service for location '{0}'")]
pub struct UnknownSite(pub String);

impl FromStr for Site {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kebalen" => Ok(Site::Kebalen),
            "gayungan" => Ok(Site::Gayungan),
            other => Err(UnknownSite(other.to_string())),
        }
    }
}

/// Numeric room index used by the forecasting service ("ROOM2" -> 2)
pub fn room_index(room: &str) -> Option<u32> {
    let digits = room.trim_start_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// What gets sent to a prediction endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub site: Site,
    pub room: u32,
    pub duration_hours: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPoint {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub time: String,
    pub temperature: String,
    pub humidity: String,
}

/// Tabular rendering of a forecast, one row per predicted point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    pub fn from_points(points: &[PredictionPoint]) -> Self {
        let rows = points
            .iter()
            .map(|p| TableRow {
                time: format_time_label(&p.timestamp),
                temperature: format!("{:.1}", p.temperature),
                humidity: format!("{:.1}", p.humidity),
            })
            .collect();
        Self { rows }
    }
}

/// Predict/hide button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelToggle {
    #[default]
    Idle,
    Shown,
}

impl PanelToggle {
    pub fn label(&self) -> &'static str {
        match self {
            PanelToggle::Idle => "Predict",
            PanelToggle::Shown => "Hide Prediction",
        }
    }

    pub fn panel_visible(&self) -> bool {
        matches!(self, PanelToggle::Shown)
    }
}
