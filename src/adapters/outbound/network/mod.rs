/// Network adapters for the prediction web service
mod heavens_above_client;

pub use heavens_above_client::{HeavensAboveClient, DEFAULT_BASE_URL};
