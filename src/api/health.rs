use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_check(State(db): State<DatabaseConnection>) -> (StatusCode, Json<Value>) {
    let probe = Statement::from_string(db.get_database_backend(), "SELECT 1".to_owned());

    match db.execute(probe).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "school-registry",
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "service": "school-registry",
                    "error": e.to_string()
                })),
            )
        }
    }
}
