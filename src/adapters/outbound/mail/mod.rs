/// Mail adapters for submitting the finished digest
mod sendmail_transport;

pub use sendmail_transport::{SendmailTransport, DEFAULT_SENDMAIL_PROGRAM};
