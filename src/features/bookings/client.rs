//! Client helpers for `/bookings`.

use crate::{
    app_lib::{AppError, QueryParams, get_json, patch_empty, post_json, resource_path},
    features::bookings::types::{
        AvailabilityQuery, Booking, BookingQuery, HallAvailability, NewBooking,
    },
};

pub async fn create_booking(booking: &NewBooking) -> Result<Booking, AppError> {
    post_json("/bookings", booking).await
}

/// Every booking on campus; admin only.
pub async fn list_all_bookings(query: &BookingQuery) -> Result<Vec<Booking>, AppError> {
    get_json("/bookings", &query.params()).await
}

pub async fn my_bookings() -> Result<Vec<Booking>, AppError> {
    get_json("/bookings/my-bookings", &QueryParams::new()).await
}

pub async fn cancel_booking(id: &str) -> Result<(), AppError> {
    patch_empty(&resource_path("/bookings", id, "/cancel")?).await
}

pub async fn hall_availability(
    query: &AvailabilityQuery,
) -> Result<Vec<HallAvailability>, AppError> {
    if query.date.trim().is_empty() {
        return Ok(Vec::new());
    }
    get_json("/bookings/availability", &query.params()).await
}
