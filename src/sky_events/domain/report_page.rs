/// Pages of the prediction service that this crate knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPage {
    /// Pass summary for one satellite, by catalog number
    PassSummary { catalog_number: u32 },
    IridiumFlares,
}

impl ReportPage {
    /// Relative path and opening query fragment; observer parameters are
    /// appended after it by the page fetcher.
    pub fn path(&self) -> String {
        match self {
            ReportPage::PassSummary { catalog_number } => {
                format!("PassSummary.aspx?satid={}", catalog_number)
            }
            ReportPage::IridiumFlares => "IridiumFlares.aspx?".to_string(),
        }
    }
}
