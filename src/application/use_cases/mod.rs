/// Use cases module containing application business logic orchestration
mod generate_digest;
mod send_digest;

pub use generate_digest::GenerateDigestUseCase;
pub use send_digest::SendDigestUseCase;
