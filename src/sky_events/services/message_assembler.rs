use crate::sky_events::domain::{DigestMessage, ReportKind};
use std::collections::HashSet;

/// A report already rendered to text, tagged with the kind of table it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport {
    pub kind: ReportKind,
    pub text: String,
}

impl FormattedReport {
    pub fn new(kind: ReportKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// MessageAssembler - joins formatted reports into one email
///
/// Reports keep the order they are given in. When the message mixes report
/// kinds, each report is preceded by a banner naming its section.
pub struct MessageAssembler {
    intro: Option<String>,
}

impl MessageAssembler {
    pub fn new() -> Self {
        Self { intro: None }
    }

    /// Opens the body with `intro` followed by a blank line
    pub fn with_intro(intro: impl Into<String>) -> Self {
        Self {
            intro: Some(intro.into()),
        }
    }

    pub fn assemble_body(&self, reports: &[FormattedReport]) -> String {
        let kinds: HashSet<ReportKind> = reports.iter().map(|r| r.kind).collect();
        let with_banners = kinds.len() > 1;

        let mut body = String::new();
        if let Some(intro) = self.intro.as_deref().filter(|i| !i.is_empty()) {
            body.push_str(intro);
            body.push_str("\n\n");
        }

        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                body.push('\n');
            }
            if with_banners {
                body.push_str(&Self::banner(report.kind));
            }
            body.push_str(&report.text);
        }

        body
    }

    pub fn assemble(
        &self,
        to: &str,
        subject: &str,
        reports: &[FormattedReport],
    ) -> DigestMessage {
        DigestMessage::new(to, subject, self.assemble_body(reports))
    }

    fn banner(kind: ReportKind) -> String {
        format!("=== {} ===\n", kind.label())
    }
}

impl Default for MessageAssembler {
    fn default() -> Self {
        Self::new()
    }
}
