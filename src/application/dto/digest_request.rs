use crate::sky_events::domain::{ObserverLocation, SatelliteQuery};

/// DigestRequest - which reports to fetch, and for whom
#[derive(Debug, Clone)]
pub struct DigestRequest {
    /// Observer the predictions are localized for
    pub observer: ObserverLocation,
    /// Satellites to fetch pass summaries for, in output order
    pub satellites: Vec<SatelliteQuery>,
    /// Whether to append the Iridium flare listing after the satellites
    pub include_flares: bool,
}

impl DigestRequest {
    pub fn new(
        observer: ObserverLocation,
        satellites: Vec<SatelliteQuery>,
        include_flares: bool,
    ) -> Self {
        Self {
            observer,
            satellites,
            include_flares,
        }
    }

    /// Number of pages a run for this request will fetch
    pub fn page_count(&self) -> usize {
        self.satellites.len() + usize::from(self.include_flares)
    }
}
