// Site topology - locations, their rooms and the sensors installed in each room
use indexmap::IndexMap;

type RoomMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct Topology {
    locations: IndexMap<String, RoomMap>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two monitored sites and their DHT sensor layout
    pub fn builtin() -> Self {
        Self::new()
            .with_room("gayungan", "ROOM1", &["DHT1", "DHT2", "DHT3", "DHT4"])
            .with_room("gayungan", "ROOM2", &["DHT5"])
            .with_room("gayungan", "ROOM3", &["DHT6"])
            .with_room("gayungan", "ROOM4", &["DHT7", "DHT8", "DHT9"])
            .with_room("gayungan", "ROOM5", &["DHT10", "DHT11", "DHT12"])
            .with_room("kebalen", "ROOM1", &["DHT1", "DHT2", "DHT3", "DHT4"])
            .with_room("kebalen", "ROOM2", &["DHT5", "DHT6"])
    }

    pub fn with_room(mut self, location: &str, room: &str, sensors: &[&str]) -> Self {
        self.locations
            .entry(location.to_string())
            .or_default()
            .insert(
                room.to_string(),
                sensors.iter().map(|s| s.to_string()).collect(),
            );
        self
    }

    pub fn locations(&self) -> Vec<&str> {
        self.locations.keys().map(String::as_str).collect()
    }

    /// Rooms of a location in declaration order, empty for an unknown location
    pub fn rooms(&self, location: &str) -> Vec<&str> {
        self.locations
            .get(location)
            .map(|rooms| rooms.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Sensors of a room in declaration order, empty when either key is unknown
    pub fn sensors(&self, location: &str, room: &str) -> &[String] {
        self.locations
            .get(location)
            .and_then(|rooms| rooms.get(room))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
