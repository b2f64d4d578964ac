use crate::ports::outbound::MailTransport;
use crate::shared::error::DigestError;
use crate::shared::Result;
use crate::sky_events::domain::DigestMessage;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const DEFAULT_SENDMAIL_PROGRAM: &str = "/usr/sbin/sendmail";

/// SendmailTransport adapter for handing messages to the local MTA
///
/// Runs `sendmail -t`, which reads recipients from the message headers, and
/// writes the full message to its stdin. A non-zero exit status is a
/// delivery failure.
pub struct SendmailTransport {
    program: PathBuf,
    args: Vec<String>,
}

impl SendmailTransport {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self::with_args(program, ["-t"])
    }

    /// Uses a custom argument list instead of the default `-t`
    pub(crate) fn with_args<I, S>(program: impl AsRef<Path>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.as_ref().to_path_buf(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn delivery_error(&self, details: String) -> anyhow::Error {
        DigestError::DeliveryError {
            program: self.program.display().to_string(),
            details,
        }
        .into()
    }
}

impl MailTransport for SendmailTransport {
    fn submit(&self, message: &DigestMessage) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| self.delivery_error(format!("Failed to start process: {}", e)))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| self.delivery_error("Process stdin is not available".to_string()))?;
            stdin
                .write_all(message.to_rfc822().as_bytes())
                .map_err(|e| self.delivery_error(format!("Failed to write message: {}", e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| self.delivery_error(format!("Failed to wait for process: {}", e)))?;

        if !status.success() {
            return Err(self.delivery_error(format!("Process exited with {}", status)));
        }

        Ok(())
    }
}
