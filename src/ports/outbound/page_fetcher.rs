use crate::shared::Result;
use crate::sky_events::domain::{Document, ObserverLocation};

/// PageFetcher port for retrieving prediction pages
///
/// This port abstracts the remote prediction service so the extraction
/// logic can be exercised against canned documents.
pub trait PageFetcher {
    /// Fetches and parses one page, localized for the observer
    ///
    /// # Arguments
    /// * `observer` - Observer position and time zone appended to the query
    /// * `path` - Relative page path with its opening query fragment
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The service answers with a non-success status code
    fn fetch(&self, observer: &ObserverLocation, path: &str) -> Result<Document>;
}
