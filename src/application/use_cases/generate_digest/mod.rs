use crate::application::dto::{DigestRequest, DigestResponse};
use crate::ports::outbound::{PageFetcher, ProgressReporter};
use crate::shared::Result;
use crate::sky_events::domain::{
    FlareRecord, ObserverLocation, PassRecord, Report, ReportKind, ReportPage, SatelliteQuery,
};
use crate::sky_events::services::TableExtractor;


/// GenerateDigestUseCase - fetches and extracts every requested report
///
/// Pages are fetched strictly one after another, satellites first in the
/// requested order and the flare listing last. The first fetch or parse
/// failure ends the run.
///
/// # Type Parameters
/// * `PF` - PageFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateDigestUseCase<PF, PR> {
    page_fetcher: PF,
    progress_reporter: PR,
}

impl<PF, PR> GenerateDigestUseCase<PF, PR>
where
    PF: PageFetcher,
    PR: ProgressReporter,
{
    /// Creates a new GenerateDigestUseCase with injected dependencies
    pub fn new(page_fetcher: PF, progress_reporter: PR) -> Self {
        Self {
            page_fetcher,
            progress_reporter,
        }
    }

    /// Executes the digest generation use case
    ///
    /// # Returns
    /// DigestResponse with one report per satellite, followed by the flare
    /// report when requested
    pub fn execute(&self, request: &DigestRequest) -> Result<DigestResponse> {
        let total = request.page_count();
        let mut reports = Vec::with_capacity(total);

        for (i, satellite) in request.satellites.iter().enumerate() {
            self.progress_reporter
                .report_progress(i, total, Some(satellite.to_string().as_str()));
            let passes = self.fetch_passes(satellite, &request.observer)?;
            reports.push(self.report_extracted(Report::passes(satellite.clone(), passes)));
        }

        if request.include_flares {
            self.progress_reporter.report_progress(
                request.satellites.len(),
                total,
                Some(ReportKind::IridiumFlares.label()),
            );
            let flares = self.fetch_flares(&request.observer)?;
            reports.push(self.report_extracted(Report::flares(flares)));
        }

        self.progress_reporter.report_progress(total, total, None);

        Ok(DigestResponse::new(reports))
    }

    /// Fetches the pass summary page for one satellite and extracts its passes
    pub fn fetch_passes(
        &self,
        satellite: &SatelliteQuery,
        observer: &ObserverLocation,
    ) -> Result<Vec<PassRecord>> {
        self.progress_reporter
            .report(&format!("🛰️  Fetching passes for {}", satellite));

        let page = ReportPage::PassSummary {
            catalog_number: satellite.catalog_number(),
        };
        let document = self.page_fetcher.fetch(observer, &page.path())?;
        TableExtractor::extract_passes(&document)
    }

    /// Fetches the Iridium flare listing and extracts its flares
    pub fn fetch_flares(&self, observer: &ObserverLocation) -> Result<Vec<FlareRecord>> {
        self.progress_reporter.report("✨ Fetching Iridium flares");

        let document = self
            .page_fetcher
            .fetch(observer, &ReportPage::IridiumFlares.path())?;
        TableExtractor::extract_flares(&document)
    }

    fn report_extracted(&self, report: Report) -> Report {
        if report.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No rows found for {}",
                report.title()
            ));
        } else {
            self.progress_reporter.report(&format!(
                "✅ Extracted {} row(s) for {}",
                report.len(),
                report.title()
            ));
        }
        report
    }
}
