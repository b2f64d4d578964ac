/// Data Transfer Objects for application layer
///
/// DTOs carry what a run asks for and what it produced between the
/// entry point and the use cases.
mod digest_request;
mod digest_response;
mod message_envelope;

pub use digest_request::DigestRequest;
pub use digest_response::DigestResponse;
pub use message_envelope::MessageEnvelope;
