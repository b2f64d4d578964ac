/// Shared helpers for integration tests
pub mod mocks;

pub const PASS_SUMMARY_PAGE: &str = include_str!("../fixtures/pass_summary_25544.html");
pub const IRIDIUM_FLARES_PAGE: &str = include_str!("../fixtures/iridium_flares.html");
