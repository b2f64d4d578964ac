use crate::shared::Result;
use crate::sky_events::domain::DigestMessage;

/// MailTransport port for handing a finished message to delivery
pub trait MailTransport {
    /// Submits the message. Delivery itself is the transport's concern;
    /// success only means the submission completed.
    ///
    /// # Errors
    /// Returns an error if the submission mechanism cannot be started or
    /// reports failure.
    fn submit(&self, message: &DigestMessage) -> Result<()>;
}
