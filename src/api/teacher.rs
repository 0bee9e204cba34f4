use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::{CreateTeacherInput, UpdateTeacherInput};
use crate::utils::validation::{FieldErrors, check_name, check_region, check_vat};

/// Teacher insert/edit form. Every field is optional on the wire so that
/// missing values surface as validation errors instead of parse failures.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherForm {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub vat: Option<String>,
    pub region_id: Option<i32>,
}

impl TeacherForm {
    pub fn into_create_input(self) -> Result<CreateTeacherInput, DomainError> {
        let mut errors = FieldErrors::new();
        let firstname = check_name("firstname", self.firstname.as_deref(), &mut errors);
        let lastname = check_name("lastname", self.lastname.as_deref(), &mut errors);
        let vat = check_vat(self.vat.as_deref(), &mut errors);
        let region_id = check_region(self.region_id, &mut errors);
        errors.into_result()?;

        Ok(CreateTeacherInput {
            firstname,
            lastname,
            vat,
            region_id,
        })
    }

    pub fn into_update_input(self, uuid: String) -> Result<UpdateTeacherInput, DomainError> {
        let input = self.into_create_input()?;

        Ok(UpdateTeacherInput {
            uuid,
            firstname: input.firstname,
            lastname: input.lastname,
            vat: input.vat,
            region_id: input.region_id,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index
    pub page: Option<u64>,
    /// Page size, capped by the server
    pub size: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of teachers with totals")
    )
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse, DomainError> {
    let page_index = params.page.unwrap_or(0);
    let page_size = state.config.page_size(params.size);

    let page = state.teacher_service.list(page_index, page_size).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = TeacherForm,
    responses(
        (status = 201, description = "Teacher created"),
        (status = 409, description = "Tax identifier already in use"),
        (status = 422, description = "Invalid fields or unknown region")
    )
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(form): Json<TeacherForm>,
) -> Result<impl IntoResponse, DomainError> {
    let input = form.into_create_input()?;
    let teacher = state.teacher_service.create(input).await?;
    let view = state.teacher_service.view_of(teacher).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{uuid}",
    params(("uuid" = String, Path, description = "Teacher reference code")),
    responses(
        (status = 200, description = "The teacher"),
        (status = 404, description = "Unknown reference code")
    )
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, DomainError> {
    let view = state.teacher_service.get(&uuid).await?;
    Ok(Json(view))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{uuid}",
    params(("uuid" = String, Path, description = "Teacher reference code")),
    request_body = TeacherForm,
    responses(
        (status = 200, description = "Teacher updated"),
        (status = 404, description = "Unknown reference code"),
        (status = 409, description = "Tax identifier already in use"),
        (status = 422, description = "Invalid fields or unknown region")
    )
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    Json(form): Json<TeacherForm>,
) -> Result<impl IntoResponse, DomainError> {
    let input = form.into_update_input(uuid)?;
    let teacher = state.teacher_service.update(input).await?;
    let view = state.teacher_service.view_of(teacher).await?;

    Ok(Json(view))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{uuid}",
    params(("uuid" = String, Path, description = "Teacher reference code")),
    responses(
        (status = 200, description = "Teacher deleted"),
        (status = 404, description = "Unknown reference code")
    )
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, DomainError> {
    state.teacher_service.delete(&uuid).await?;
    Ok(Json(json!({"message": "Teacher deleted successfully"})))
}
