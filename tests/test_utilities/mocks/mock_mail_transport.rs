use std::sync::{Arc, Mutex};
use heavens_digest::prelude::*;

/// Mock MailTransport capturing submitted messages
#[derive(Clone, Default)]
pub struct MockMailTransport {
    pub sent: Arc<Mutex<Vec<DigestMessage>>>,
    pub should_fail: bool,
}

impl MockMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn get_sent(&self) -> Vec<DigestMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailTransport for MockMailTransport {
    fn submit(&self, message: &DigestMessage) -> Result<()> {
        if self.should_fail {
            return Err(DigestError::DeliveryError {
                program: "mock-sendmail".to_string(),
                details: "Mock mail transport failure".to_string(),
            }
            .into());
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
