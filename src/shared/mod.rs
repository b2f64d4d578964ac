/// Shared module containing common utilities and types
pub mod error;
pub mod result;

pub use result::Result;
