use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use school_registry::api;
use school_registry::config::Config;
use school_registry::db;
use school_registry::infrastructure::AppState;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app with an in-memory database
async fn setup_test_app() -> (Router, DatabaseConnection) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db.clone(), Config::default());
    (api::api_router(state), db)
}

// Helper to create a test region
async fn create_test_region(db: &DatabaseConnection, name: &str) -> i32 {
    let region = school_registry::models::region::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    let res = region.insert(db).await.expect("Failed to create region");
    res.id
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn teacher_form(vat: &str, region_id: i32) -> Value {
    json!({
        "firstname": "Anna",
        "lastname": "Papadopoulou",
        "vat": vat,
        "regionId": region_id
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = setup_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_fetch_teacher() {
    let (app, db) = setup_test_app().await;
    let attica = create_test_region(&db, "Attica").await;

    let (status, body) = send(
        &app,
        "POST",
        "/teachers",
        Some(teacher_form("123456789", attica)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["regionName"], "Attica");
    assert_eq!(body["taxId"], "123456789");

    let code = body["referenceCode"].as_str().unwrap().to_string();
    let (status, body) = send(&app, "GET", &format!("/teachers/{}", code), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Anna");
}

#[tokio::test]
async fn test_create_error_statuses() {
    let (app, db) = setup_test_app().await;
    let attica = create_test_region(&db, "Attica").await;

    send(
        &app,
        "POST",
        "/teachers",
        Some(teacher_form("123456789", attica)),
    )
    .await;

    // Duplicate tax id
    let (status, body) = send(
        &app,
        "POST",
        "/teachers",
        Some(teacher_form("123456789", attica)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "already_exists");

    // Unknown region
    let (status, body) = send(
        &app,
        "POST",
        "/teachers",
        Some(teacher_form("987654321", 999)),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "invalid_reference");

    // Bad shape never reaches the registry
    let (status, body) = send(
        &app,
        "POST",
        "/teachers",
        Some(json!({ "firstname": "A", "vat": "12ab", "regionId": attica })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "validation");
}

#[tokio::test]
async fn test_update_and_delete_flow() {
    let (app, db) = setup_test_app().await;
    let attica = create_test_region(&db, "Attica").await;
    let crete = create_test_region(&db, "Crete").await;

    let (_, body) = send(
        &app,
        "POST",
        "/teachers",
        Some(teacher_form("123456789", attica)),
    )
    .await;
    let code = body["referenceCode"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/teachers/{}", code),
        Some(json!({
            "firstname": "Maria",
            "lastname": "Georgiou",
            "vat": "123456789",
            "regionId": crete
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regionName"], "Crete");
    assert_eq!(body["referenceCode"], code.as_str());

    let (status, body) = send(&app, "GET", &format!("/regions/{}/teachers", crete), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, _) = send(&app, "DELETE", &format!("/teachers/{}", code), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &format!("/teachers/{}", code), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/teachers/{}", code),
        Some(teacher_form("123456789", attica)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_teachers_paginates() {
    let (app, db) = setup_test_app().await;
    let attica = create_test_region(&db, "Attica").await;

    for i in 0..7 {
        let (status, _) = send(
            &app,
            "POST",
            "/teachers",
            Some(teacher_form(&format!("{}", 200_000_000 + i), attica)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Default page size is 5
    let (status, body) = send(&app, "GET", "/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["totalElements"], 7);
    assert_eq!(body["totalPages"], 2);

    let (_, body) = send(&app, "GET", "/teachers?page=1&size=5", None).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["pageIndex"], 1);

    let (status, body) = send(&app, "GET", "/teachers?page=9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());

    for page in [u64::MAX, i64::MAX as u64] {
        let (status, body) = send(&app, "GET", &format!("/teachers?page={}", page), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["items"].as_array().unwrap().is_empty());
        assert_eq!(body["totalElements"], 7);
    }
}

#[tokio::test]
async fn test_list_regions_sorted() {
    let (app, db) = setup_test_app().await;
    create_test_region(&db, "Crete").await;
    create_test_region(&db, "Attica").await;

    let (status, body) = send(&app, "GET", "/regions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"][0]["name"], "Attica");
    assert_eq!(body["regions"][1]["name"], "Crete");

    let (status, _) = send(&app, "GET", "/regions/999/teachers", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
