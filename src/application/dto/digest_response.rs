use crate::sky_events::domain::Report;

/// DigestResponse - reports in the order they were requested
#[derive(Debug, Clone)]
pub struct DigestResponse {
    pub reports: Vec<Report>,
}

impl DigestResponse {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Total number of pass and flare records across all reports
    pub fn record_count(&self) -> usize {
        self.reports.iter().map(Report::len).sum()
    }
}
