/// Observer position and local time zone used to localize predictions
///
/// No range checks are applied to the coordinates; the remote service
/// decides what it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverLocation {
    latitude: f64,
    longitude: f64,
    altitude_m: i32,
    time_zone: String,
}

impl ObserverLocation {
    /// # Arguments
    /// * `latitude` - Decimal degrees, north positive
    /// * `longitude` - Decimal degrees, east positive
    /// * `altitude_m` - Altitude above sea level in meters
    /// * `time_zone` - Three-letter time zone code (e.g. "MST")
    pub fn new(latitude: f64, longitude: f64, altitude_m: i32, time_zone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            altitude_m,
            time_zone: time_zone.into(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude_m(&self) -> i32 {
        self.altitude_m
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }
}
