//! Client helpers for the representative request flow and the lecturer's
//! approval inbox.

use crate::{
    app_lib::{AppError, QueryParams, get_json, patch_empty, patch_json, post_json, resource_path},
    features::{
        refs::Person,
        requests::types::{BookingRequest, NewBookingRequest, ResponseMessage},
    },
};
use serde::de::IgnoredAny;

pub async fn create_booking_request(
    request: &NewBookingRequest,
) -> Result<BookingRequest, AppError> {
    post_json("/representative/booking-request", request).await
}

pub async fn my_requests() -> Result<Vec<BookingRequest>, AppError> {
    get_json("/representative/my-requests", &QueryParams::new()).await
}

/// Withdraws a pending request.
pub async fn cancel_request(id: &str) -> Result<(), AppError> {
    patch_empty(&resource_path("/representative/booking-request", id, "/cancel")?).await
}

/// Lecturers a representative can address a request to.
pub async fn list_lecturers() -> Result<Vec<Person>, AppError> {
    get_json("/representative/lecturers", &QueryParams::new()).await
}

/// Requests addressed to the signed-in lecturer.
pub async fn booking_requests() -> Result<Vec<BookingRequest>, AppError> {
    get_json("/lecturer/booking-requests", &QueryParams::new()).await
}

/// Approves a request; the backend creates the booking.
pub async fn approve(id: &str, draft: &str) -> Result<(), AppError> {
    let path = resource_path("/lecturer/booking-requests", id, "/approve")?;
    patch_json::<_, IgnoredAny>(&path, &ResponseMessage::approval(draft)).await?;
    Ok(())
}

pub async fn reject(id: &str, draft: &str) -> Result<(), AppError> {
    let body = ResponseMessage::rejection(draft)?;
    let path = resource_path("/lecturer/booking-requests", id, "/reject")?;
    patch_json::<_, IgnoredAny>(&path, &body).await?;
    Ok(())
}
