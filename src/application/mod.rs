/// Application layer - Use cases and DTOs
///
/// This layer orchestrates page fetching, extraction, formatting and
/// delivery through the outbound ports.
pub mod dto;
pub mod use_cases;
