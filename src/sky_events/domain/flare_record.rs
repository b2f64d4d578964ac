/// A predicted Iridium flare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlareRecord {
    time: String,
    magnitude: String,
    altitude: String,
    azimuth: String,
    satellite: String,
    center_distance: String,
    center_magnitude: String,
    sun_altitude: String,
}

impl FlareRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time: impl Into<String>,
        magnitude: impl Into<String>,
        altitude: impl Into<String>,
        azimuth: impl Into<String>,
        satellite: impl Into<String>,
        center_distance: impl Into<String>,
        center_magnitude: impl Into<String>,
        sun_altitude: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            magnitude: magnitude.into(),
            altitude: altitude.into(),
            azimuth: azimuth.into(),
            satellite: satellite.into(),
            center_distance: center_distance.into(),
            center_magnitude: center_magnitude.into(),
            sun_altitude: sun_altitude.into(),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    pub fn altitude(&self) -> &str {
        &self.altitude
    }

    pub fn azimuth(&self) -> &str {
        &self.azimuth
    }

    pub fn satellite(&self) -> &str {
        &self.satellite
    }

    /// Distance from the observer to the flare centre line, as displayed
    pub fn center_distance(&self) -> &str {
        &self.center_distance
    }

    /// Magnitude at the flare centre line
    pub fn center_magnitude(&self) -> &str {
        &self.center_magnitude
    }

    pub fn sun_altitude(&self) -> &str {
        &self.sun_altitude
    }
}
