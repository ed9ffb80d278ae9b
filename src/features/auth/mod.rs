//! Auth feature module covering login, registration, OTP verification,
//! password recovery and session hydration. It keeps authentication logic out
//! of the UI and must avoid logging passwords, OTP codes or tokens.
//!
//! Flow Overview: lecturers register with a Gmail address, receive an OTP and
//! get their first token from `/auth/verify-otp`. Representatives register and
//! wait for an admin to verify them before they can sign in. Admins are
//! created by other admins. Every signed-in request carries the bearer token.

pub(crate) mod access;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod forms;
#[cfg(target_arch = "wasm32")]
mod guards;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RedirectIfSignedIn, RequireRole};
