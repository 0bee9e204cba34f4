use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "All regions ordered by name")
    )
)]
pub async fn list_regions(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let regions = state.teacher_service.regions().await?;

    Ok(Json(json!({
        "regions": regions,
        "total": regions.len()
    })))
}

#[utoipa::path(
    get,
    path = "/api/regions/{id}/teachers",
    params(("id" = i32, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Teachers currently in the region"),
        (status = 422, description = "Unknown region")
    )
)]
pub async fn list_region_teachers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, DomainError> {
    let teachers = state.teacher_service.region_members(id).await?;

    Ok(Json(json!({
        "teachers": teachers,
        "total": teachers.len()
    })))
}
