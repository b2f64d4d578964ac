use crate::application::dto::MessageEnvelope;
use crate::ports::outbound::{MailTransport, ProgressReporter, ReportFormatter};
use crate::shared::Result;
use crate::sky_events::domain::{DigestMessage, Report};
use crate::sky_events::services::{FormattedReport, MessageAssembler};

/// SendDigestUseCase - formats reports into one message and submits it
///
/// # Type Parameters
/// * `F` - ReportFormatter implementation
/// * `MT` - MailTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct SendDigestUseCase<F, MT, PR> {
    formatter: F,
    mail_transport: MT,
    progress_reporter: PR,
}

impl<F, MT, PR> SendDigestUseCase<F, MT, PR>
where
    F: ReportFormatter,
    MT: MailTransport,
    PR: ProgressReporter,
{
    pub fn new(formatter: F, mail_transport: MT, progress_reporter: PR) -> Self {
        Self {
            formatter,
            mail_transport,
            progress_reporter,
        }
    }

    /// Builds the message without submitting it
    pub fn compose(&self, reports: &[Report], envelope: &MessageEnvelope) -> DigestMessage {
        let formatted: Vec<FormattedReport> = reports
            .iter()
            .map(|report| FormattedReport::new(report.kind(), self.formatter.format(report)))
            .collect();

        let assembler = match &envelope.intro {
            Some(intro) => MessageAssembler::with_intro(intro.as_str()),
            None => MessageAssembler::new(),
        };
        assembler.assemble(&envelope.recipient, &envelope.subject, &formatted)
    }

    /// Composes the digest and hands it to the mail transport
    ///
    /// # Returns
    /// The message that was submitted
    pub fn execute(&self, reports: &[Report], envelope: &MessageEnvelope) -> Result<DigestMessage> {
        let message = self.compose(reports, envelope);

        self.progress_reporter
            .report(&format!("📨 Submitting digest to {}", envelope.recipient));
        self.mail_transport.submit(&message)?;
        self.progress_reporter
            .report_completion(&format!("✅ Digest submitted: \"{}\"", envelope.subject));

        Ok(message)
    }
}
