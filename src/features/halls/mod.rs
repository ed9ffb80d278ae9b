//! Halls: the bookable rooms of each campus building.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
