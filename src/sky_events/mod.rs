/// Sky events domain layer
///
/// Pure data types for observers, satellites, passes, flares and reports,
/// plus the services that turn parsed pages into those types.
pub mod domain;
pub mod services;
