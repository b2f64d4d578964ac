use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use heavens_digest::prelude::*;

/// Mock PageFetcher serving canned HTML by page path
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    pub pages: HashMap<String, String>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: ReportPage, body: &str) -> Self {
        self.pages.insert(page.path(), body.to_string());
        self
    }

    /// Paths requested so far, in order
    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for MockPageFetcher {
    fn fetch(&self, _observer: &ObserverLocation, path: &str) -> Result<Document> {
        self.requests.lock().unwrap().push(path.to_string());

        match self.pages.get(path) {
            Some(body) => Ok(Document::parse(body)),
            None => Err(DigestError::FetchError {
                url: path.to_string(),
                details: "Mock page fetcher has no page for this path".to_string(),
            }
            .into()),
        }
    }
}
