//! Section timetables and the grid overlay used to render them.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod grid;
pub(crate) mod types;
