use crate::sky_events::domain::Report;

/// ReportFormatter port for rendering a report as text
pub trait ReportFormatter {
    /// Renders the header block followed by one line per record.
    /// Must be deterministic: the same report always yields the same text.
    fn format(&self, report: &Report) -> String;
}
