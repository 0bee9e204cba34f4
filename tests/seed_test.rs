use school_registry::{db, seed};
use school_registry::services::TeacherService;

#[tokio::test]
async fn test_seed_regions_is_idempotent() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");

    let inserted = seed::seed_regions(&db).await.expect("first seed");
    assert_eq!(inserted, seed::REGIONS.len() as u64);

    let again = seed::seed_regions(&db).await.expect("second seed");
    assert_eq!(again, 0);

    let service = TeacherService::with_tracing(db.clone());
    let regions = service.regions().await.unwrap();
    assert_eq!(regions.len(), seed::REGIONS.len());

    // Sorted by name, and Attica keeps the first id
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(regions[0].name, "Attica");
    assert_eq!(regions[0].id, 1);
}
