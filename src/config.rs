//! Run configuration for heavens-digest.
//!
//! All values are fixed at build time; `DigestConfig::from_constants()` is
//! the configuration the binary runs with.

use crate::adapters::outbound::mail::DEFAULT_SENDMAIL_PROGRAM;
use crate::adapters::outbound::network::DEFAULT_BASE_URL;
use crate::application::dto::{DigestRequest, MessageEnvelope};
use crate::shared::error::DigestError;
use crate::shared::Result;
use crate::sky_events::domain::{ObserverLocation, SatelliteQuery};

const OBSERVER_LATITUDE: f64 = 34.0854;
const OBSERVER_LONGITUDE: f64 = -106.8914;
const OBSERVER_ALTITUDE_M: i32 = 1403;
const OBSERVER_TIME_ZONE: &str = "MST";

const RECIPIENT: &str = "atl@jbcrawford.us";
const SUBJECT: &str = "Upcoming astronomical events";
const INTRO: &str = "Interesting astronomical events in the next ten days:";

/// Satellites to report passes for, as (display name, catalog number)
const SATELLITES: &[(&str, u32)] = &[("International Space Station", 25544)];

const INCLUDE_FLARES: bool = true;

/// Everything one run needs: who is observing, what to fetch, where to send it.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub observer: ObserverLocation,
    pub satellites: Vec<SatelliteQuery>,
    pub include_flares: bool,
    pub recipient: String,
    pub subject: String,
    pub intro: String,
    pub base_url: String,
    pub sendmail_program: String,
}

impl DigestConfig {
    /// Builds the configuration from the compiled-in constants.
    pub fn from_constants() -> Result<Self> {
        let satellites = SATELLITES
            .iter()
            .map(|(name, number)| SatelliteQuery::new(*name, *number))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            observer: ObserverLocation::new(
                OBSERVER_LATITUDE,
                OBSERVER_LONGITUDE,
                OBSERVER_ALTITUDE_M,
                OBSERVER_TIME_ZONE,
            ),
            satellites,
            include_flares: INCLUDE_FLARES,
            recipient: RECIPIENT.to_string(),
            subject: SUBJECT.to_string(),
            intro: INTRO.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            sendmail_program: DEFAULT_SENDMAIL_PROGRAM.to_string(),
        })
    }

    /// Rejects configurations that cannot produce a request or a message.
    /// Coordinates are passed through unchecked.
    pub fn validate(&self) -> Result<()> {
        if self.observer.time_zone().trim().is_empty() {
            return Err(validation("observer time zone code must not be empty"));
        }
        if self.recipient.trim().is_empty() {
            return Err(validation("recipient must not be empty"));
        }
        for (field, value) in [("recipient", &self.recipient), ("subject", &self.subject)] {
            if value.contains(|c: char| c == '\r' || c == '\n') {
                return Err(validation(&format!("{} must be a single line", field)));
            }
        }
        if self.satellites.is_empty() && !self.include_flares {
            return Err(validation(
                "nothing to report: no satellites configured and flares disabled",
            ));
        }
        Ok(())
    }

    pub fn digest_request(&self) -> DigestRequest {
        DigestRequest::new(
            self.observer.clone(),
            self.satellites.clone(),
            self.include_flares,
        )
    }

    pub fn envelope(&self) -> MessageEnvelope {
        MessageEnvelope::new(self.recipient.as_str(), self.subject.as_str())
            .with_intro(self.intro.as_str())
    }
}

fn validation(message: &str) -> anyhow::Error {
    DigestError::Validation {
        message: message.to_string(),
    }
    .into()
}
