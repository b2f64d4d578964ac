use crate::ports::outbound::PageFetcher;
use crate::shared::error::DigestError;
use crate::shared::Result;
use crate::sky_events::domain::{Document, ObserverLocation};

/// Public host of the prediction service
pub const DEFAULT_BASE_URL: &str = "http://heavens-above.com";

/// HeavensAboveClient adapter for fetching prediction pages
///
/// This adapter implements the PageFetcher port with a blocking reqwest
/// client. Requests are made one at a time and never retried.
pub struct HeavensAboveClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HeavensAboveClient {
    /// Creates a client against the given service root
    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("heavens-digest/{}", version);
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the request URL for a page
    ///
    /// The path already carries the opening `?` (and the satellite id for
    /// pass pages); observer parameters are appended with `&`.
    pub fn build_url(&self, observer: &ObserverLocation, path: &str) -> String {
        format!(
            "{}/{}&lat={}&lng={}&alt={}&tz={}",
            self.base_url,
            path.trim_start_matches('/'),
            observer.latitude(),
            observer.longitude(),
            observer.altitude_m(),
            urlencoding::encode(observer.time_zone())
        )
    }

    fn fetch_body(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| DigestError::FetchError {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().map_err(|e| DigestError::FetchError {
            url: url.to_string(),
            details: format!("Failed to read response body: {}", e),
        })?;
        Ok(body)
    }
}

impl PageFetcher for HeavensAboveClient {
    fn fetch(&self, observer: &ObserverLocation, path: &str) -> Result<Document> {
        let url = self.build_url(observer, path);
        let body = self.fetch_body(&url)?;
        Ok(Document::parse(&body))
    }
}
