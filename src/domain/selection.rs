// Selector models and the two cascading selector groups
use super::prediction::PredictionDuration;
use super::topology::Topology;

/// Sentinel sensor value meaning every sensor of the room
pub const ALL_SENSORS: &str = "ALL";
const ALL_SENSORS_LABEL: &str = "All Sensor";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    fn labelled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SelectionError {
    #[error("'{value}' is not an option of the {selector} selector")]
    UnknownOption {
        selector: &'static str,
        value: String,
    },
}

/// A single dropdown: its options and the currently chosen value
#[derive(Debug, Clone)]
pub struct Selector {
    name: &'static str,
    placeholder: &'static str,
    options: Vec<SelectOption>,
    selected: Option<String>,
}

impl Selector {
    pub fn new(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    /// Replace all options; the selection goes back to the placeholder
    pub fn fill(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = None;
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    fn check(&self, value: Option<&str>) -> Result<(), SelectionError> {
        match value {
            Some(v) if !self.values().contains(&v) => {
                Err(SelectionError::UnknownOption {
                    selector: self.name,
                    value: v.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    pub fn select(&mut self, value: Option<&str>) -> Result<(), SelectionError> {
        self.check(value)?;
        self.selected = value.map(str::to_string);
        Ok(())
    }
}

/// A fully chosen live selection
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSelection {
    pub location: String,
    pub room: String,
    pub sensor: String,
}

/// Location → room → sensor cascade of the live dashboard
#[derive(Debug, Clone)]
pub struct LiveSelectors {
    pub location: Selector,
    pub room: Selector,
    pub sensor: Selector,
}

impl LiveSelectors {
    pub fn new(topology: &Topology) -> Self {
        Self {
            location: location_selector(topology),
            room: Selector::new("room", "Select Room"),
            sensor: Selector::new("sensor", "Select Sensor"),
        }
    }

    pub fn on_location_changed(
        &mut self,
        topology: &Topology,
        location: Option<&str>,
    ) -> Result<(), SelectionError> {
        self.location.select(location)?;
        self.room.clear();
        self.sensor.clear();

        if let Some(location) = location {
            self.room.fill(room_options(topology, location));
        }
        Ok(())
    }

    /// Repopulates the sensor list behind `ALL` and selects `ALL`.
    ///
    /// Returns `true` once the sensor list is populated, which is the signal
    /// for the caller to fetch readings for the new room.
    pub fn on_room_changed(
        &mut self,
        topology: &Topology,
        room: Option<&str>,
    ) -> Result<bool, SelectionError> {
        self.room.select(room)?;
        self.sensor.clear();

        let (Some(location), Some(room)) = (self.location.selected(), self.room.selected()) else {
            return Ok(false);
        };

        let mut options = vec![SelectOption::labelled(ALL_SENSORS, ALL_SENSORS_LABEL)];
        options.extend(
            topology
                .sensors(location, room)
                .iter()
                .map(|s| SelectOption::new(s.as_str())),
        );
        self.sensor.fill(options);
        self.sensor.select(Some(ALL_SENSORS))?;
        Ok(true)
    }

    pub fn on_sensor_changed(&mut self, sensor: Option<&str>) -> Result<(), SelectionError> {
        self.sensor.select(sensor)
    }

    pub fn selection(&self) -> Option<LiveSelection> {
        Some(LiveSelection {
            location: self.location.selected()?.to_string(),
            room: self.room.selected()?.to_string(),
            sensor: self.sensor.selected()?.to_string(),
        })
    }
}

/// A fully chosen prediction selection
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionSelection {
    pub location: String,
    pub room: String,
    pub duration: PredictionDuration,
}

/// Location → room cascade of the prediction panel, plus the duration choice
#[derive(Debug, Clone)]
pub struct PredictionSelectors {
    pub location: Selector,
    pub room: Selector,
    pub duration: Selector,
}

impl PredictionSelectors {
    pub fn new(topology: &Topology) -> Self {
        let mut duration = Selector::new("duration", "Select Duration");
        duration.fill(
            PredictionDuration::ALL
                .iter()
                .map(|d| SelectOption::labelled(d.hours().to_string(), d.label()))
                .collect(),
        );

        Self {
            location: location_selector(topology),
            room: Selector::new("room", "Select Room"),
            duration,
        }
    }

    pub fn on_location_changed(
        &mut self,
        topology: &Topology,
        location: Option<&str>,
    ) -> Result<(), SelectionError> {
        self.location.select(location)?;
        self.room.clear();
        self.duration.deselect();

        if let Some(location) = location {
            self.room.fill(room_options(topology, location));
        }
        Ok(())
    }

    pub fn on_room_changed(&mut self, room: Option<&str>) -> Result<(), SelectionError> {
        self.room.select(room)
    }

    pub fn on_duration_changed(&mut self, hours: Option<&str>) -> Result<(), SelectionError> {
        self.duration.select(hours)
    }

    pub fn selection(&self) -> Option<PredictionSelection> {
        let hours = self.duration.selected()?.parse::<u32>().ok()?;
        Some(PredictionSelection {
            location: self.location.selected()?.to_string(),
            room: self.room.selected()?.to_string(),
            duration: PredictionDuration::from_hours(hours)?,
        })
    }
}

fn location_selector(topology: &Topology) -> Selector {
    let mut selector = Selector::new("location", "Select Location");
    selector.fill(
        topology
            .locations()
            .into_iter()
            .map(SelectOption::new)
            .collect(),
    );
    selector
}

fn room_options(topology: &Topology, location: &str) -> Vec<SelectOption> {
    topology
        .rooms(location)
        .into_iter()
        .map(SelectOption::new)
        .collect()
}
