//! Client helpers for `/admin` endpoints.

use crate::{
    app_lib::{AppError, QueryParams, delete_empty, get_json, patch_empty, post_json, resource_path},
    features::{
        admin::types::{AdminStats, NewStaffRequest, UserFilter},
        auth::types::User,
    },
};
use serde::de::IgnoredAny;

pub async fn list_users(filter: &UserFilter) -> Result<Vec<User>, AppError> {
    get_json("/admin/users", &filter.params()).await
}

pub async fn add_lecturer(request: &NewStaffRequest) -> Result<(), AppError> {
    post_json::<_, IgnoredAny>("/admin/lecturer", request).await?;
    Ok(())
}

pub async fn add_admin(request: &NewStaffRequest) -> Result<(), AppError> {
    post_json::<_, IgnoredAny>("/admin/admin", request).await?;
    Ok(())
}

pub async fn remove_user(id: &str) -> Result<(), AppError> {
    delete_empty(&resource_path("/admin/user", id, "")?).await
}

pub async fn remove_admin(id: &str) -> Result<(), AppError> {
    delete_empty(&resource_path("/admin/admin", id, "")?).await
}

/// Blocks an active user or unblocks a blocked one.
pub async fn toggle_block(id: &str) -> Result<(), AppError> {
    patch_empty(&resource_path("/admin/user", id, "/block")?).await
}

pub async fn verify_representative(id: &str) -> Result<(), AppError> {
    patch_empty(&resource_path("/admin/representative", id, "/verify")?).await
}

pub async fn stats() -> Result<AdminStats, AppError> {
    get_json("/admin/stats", &QueryParams::new()).await
}
