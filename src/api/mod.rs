pub mod health;
pub mod region;
pub mod teacher;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Regions
        .route("/regions", get(region::list_regions))
        .route("/regions/:id/teachers", get(region::list_region_teachers))
        // Teachers
        .route(
            "/teachers",
            get(teacher::list_teachers).post(teacher::create_teacher),
        )
        .route(
            "/teachers/:uuid",
            get(teacher::get_teacher)
                .put(teacher::update_teacher)
                .delete(teacher::delete_teacher),
        )
        .with_state(state)
}

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
            DomainError::InvalidReference(_) | DomainError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DomainError::Database(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({
                "error": self.to_string(),
                "kind": self.kind(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            DomainError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DomainError::AlreadyExists("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DomainError::InvalidReference("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            DomainError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
