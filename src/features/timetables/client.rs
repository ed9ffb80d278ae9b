//! Client helpers for `/timetables`. Writes are admin only.

use crate::{
    app_lib::{
        AppError, QueryParams, delete_empty, get_json, patch_empty, post_json, put_json,
        resource_path,
    },
    features::timetables::types::{Section, Timetable, TimetableDraft, TimetableQuery},
};

pub async fn list_timetables(query: &TimetableQuery) -> Result<Vec<Timetable>, AppError> {
    get_json("/timetables", &query.params()).await
}

pub async fn get_timetable(id: &str) -> Result<Timetable, AppError> {
    get_json(&resource_path("/timetables", id, "")?, &QueryParams::new()).await
}

pub async fn create_timetable(draft: &TimetableDraft) -> Result<Timetable, AppError> {
    draft.validate()?;
    post_json("/timetables", draft).await
}

pub async fn update_timetable(id: &str, draft: &TimetableDraft) -> Result<Timetable, AppError> {
    draft.validate()?;
    put_json(&resource_path("/timetables", id, "")?, draft).await
}

pub async fn delete_timetable(id: &str) -> Result<(), AppError> {
    delete_empty(&resource_path("/timetables", id, "")?).await
}

/// Flips `isActive`; inactive timetables stop blocking hall availability.
pub async fn toggle_status(id: &str) -> Result<(), AppError> {
    patch_empty(&resource_path("/timetables", id, "/toggle-status")?).await
}

pub async fn sections(query: &TimetableQuery) -> Result<Vec<Section>, AppError> {
    get_json("/timetables/sections", &query.params()).await
}
