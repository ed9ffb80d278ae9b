//! Direct hall bookings made by lecturers, plus the availability view shared
//! by every hall picker.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod filters;
pub(crate) mod types;
