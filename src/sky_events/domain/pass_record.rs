/// Time and sky position of one event within a pass (start, peak or end)
///
/// Values are carried exactly as the service displays them. Azimuth may be
/// a compass point ("NE") or degrees depending on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSet {
    time: String,
    altitude: String,
    azimuth: String,
}

impl TimeSet {
    pub fn new(time: impl Into<String>, altitude: impl Into<String>, azimuth: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            altitude: altitude.into(),
            azimuth: azimuth.into(),
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn altitude(&self) -> &str {
        &self.altitude
    }

    pub fn azimuth(&self) -> &str {
        &self.azimuth
    }
}

/// A predicted visible pass of a satellite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassRecord {
    date: String,
    magnitude: String,
    start: TimeSet,
    peak: TimeSet,
    end: TimeSet,
}

impl PassRecord {
    pub fn new(
        date: impl Into<String>,
        magnitude: impl Into<String>,
        start: TimeSet,
        peak: TimeSet,
        end: TimeSet,
    ) -> Self {
        Self {
            date: date.into(),
            magnitude: magnitude.into(),
            start,
            peak,
            end,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Brightness as displayed; may be empty or non-numeric
    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    pub fn start(&self) -> &TimeSet {
        &self.start
    }

    pub fn peak(&self) -> &TimeSet {
        &self.peak
    }

    pub fn end(&self) -> &TimeSet {
        &self.end
    }
}
