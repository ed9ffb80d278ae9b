//! Shared frontend utilities for API access, configuration, errors, browser
//! storage, logging, notifications and build metadata.
//!
//! ## Session Handling
//!
//! 1. **Sign in:** `/auth/login` (or `/auth/verify-otp` for lecturers) returns a
//!    bearer token and the user record.
//! 2. **Persist:** the token and a copy of the user are written to
//!    `localStorage` so a reload can restore the session.
//! 3. **Usage:** every API helper attaches `Authorization: Bearer <token>`.
//! 4. **Expiry:** a `401` from any endpoint clears the stored session and sends
//!    the browser to `/login`.
//!
//! Helpers here never log tokens, passwords or OTP codes; callers must do the
//! same.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod dates;
#[cfg(target_arch = "wasm32")]
pub(crate) mod dialog;
pub(crate) mod errors;
pub(crate) mod in_flight;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;
pub(crate) mod query;
#[cfg(target_arch = "wasm32")]
pub(crate) mod storage;
pub(crate) mod theme;
pub(crate) mod toast;

pub(crate) use build_info::GIT_COMMIT_HASH;
pub(crate) use errors::AppError;
pub(crate) use query::{QueryParams, resource_path};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_empty, get_json, patch_empty, patch_json, post_empty, post_json, put_json,
};
