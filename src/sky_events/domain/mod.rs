pub mod document;
pub mod flare_record;
pub mod message;
pub mod observer;
pub mod pass_record;
pub mod report;
pub mod report_page;
pub mod satellite;

pub use document::{Document, TableRow};
pub use flare_record::FlareRecord;
pub use message::DigestMessage;
pub use observer::ObserverLocation;
pub use pass_record::{PassRecord, TimeSet};
pub use report::{Report, ReportKind};
pub use report_page::ReportPage;
pub use satellite::SatelliteQuery;
