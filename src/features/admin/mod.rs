//! Admin-only user management and dashboard counters.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
