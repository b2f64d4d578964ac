//! heavens-digest - satellite pass and Iridium flare digest mailer
//!
//! Fetches prediction tables from heavens-above.com for a fixed observer,
//! renders them as fixed-width plain text and submits the result as one
//! email through the local `sendmail`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sky_events`): Records, reports, page parsing and extraction
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, sendmail, text formatter, console
//! - **Shared** (`shared`): Error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use heavens_digest::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = DigestConfig::from_constants()?;
//!
//! let generate = GenerateDigestUseCase::new(
//!     HeavensAboveClient::new(&config.base_url)?,
//!     StderrProgressReporter::new(),
//! );
//! let response = generate.execute(&config.digest_request())?;
//!
//! let send = SendDigestUseCase::new(
//!     PlainTextFormatter::new(),
//!     SendmailTransport::new(&config.sendmail_program),
//!     StderrProgressReporter::new(),
//! );
//! send.execute(&response.reports, &config.envelope())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod sky_events;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::formatters::PlainTextFormatter;
    pub use crate::adapters::outbound::mail::SendmailTransport;
    pub use crate::adapters::outbound::network::HeavensAboveClient;
    pub use crate::application::dto::{DigestRequest, DigestResponse, MessageEnvelope};
    pub use crate::application::use_cases::{GenerateDigestUseCase, SendDigestUseCase};
    pub use crate::config::DigestConfig;
    pub use crate::ports::outbound::{
        MailTransport, PageFetcher, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{DigestError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::sky_events::domain::{
        DigestMessage, Document, FlareRecord, ObserverLocation, PassRecord, Report, ReportKind,
        ReportPage, SatelliteQuery, TableRow, TimeSet,
    };
    pub use crate::sky_events::services::{FormattedReport, MessageAssembler, TableExtractor};
}
