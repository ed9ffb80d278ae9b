//! Client helpers for `/halls`. Only admins may write; the API enforces that.

use crate::{
    app_lib::{AppError, QueryParams, delete_empty, get_json, post_json, put_json, resource_path},
    features::halls::types::{Hall, HallPayload, HallQuery, InitializeResponse},
};

pub async fn list_halls(query: &HallQuery) -> Result<Vec<Hall>, AppError> {
    get_json("/halls", &query.params()).await
}

pub async fn get_hall(id: &str) -> Result<Hall, AppError> {
    get_json(&resource_path("/halls", id, "")?, &QueryParams::new()).await
}

pub async fn create_hall(payload: &HallPayload) -> Result<Hall, AppError> {
    post_json("/halls", payload).await
}

pub async fn update_hall(id: &str, payload: &HallPayload) -> Result<Hall, AppError> {
    put_json(&resource_path("/halls", id, "")?, payload).await
}

pub async fn delete_hall(id: &str) -> Result<(), AppError> {
    delete_empty(&resource_path("/halls", id, "")?).await
}

/// Seeds the default campus halls on an empty backend.
pub async fn initialize_halls() -> Result<InitializeResponse, AppError> {
    post_json("/halls/initialize", &serde_json::json!({})).await
}
