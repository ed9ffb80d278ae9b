//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while API handling and validation live in
//! dedicated feature areas.

pub(crate) mod admin;
pub(crate) mod auth;
pub(crate) mod bookings;
pub(crate) mod catalog;
pub(crate) mod halls;
pub(crate) mod refs;
pub(crate) mod requests;
pub(crate) mod timetables;
