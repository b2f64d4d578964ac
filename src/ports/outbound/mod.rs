/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (web service, mail, console).
pub mod mail_transport;
pub mod page_fetcher;
pub mod progress_reporter;
pub mod report_formatter;

pub use mail_transport::MailTransport;
pub use page_fetcher::PageFetcher;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
