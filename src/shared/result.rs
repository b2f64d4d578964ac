/// Result alias used across the crate; typed `DigestError`s are carried
/// inside `anyhow::Error` and recovered with `downcast_ref` where needed.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
