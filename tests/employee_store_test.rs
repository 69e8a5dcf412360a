//! SeaORM employee store tests against an in-memory SQLite database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use payroll_api::config::Config;
use payroll_api::domain::NewEmployee;
use payroll_api::infra::{Database, EmployeeRepository, EmployeeStore};
use payroll_api::{create_router, AppState};

/// Single pooled connection so every query sees the same in-memory database
async fn test_database() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
    };
    Database::connect(&config)
        .await
        .expect("in-memory SQLite with migrations")
}

async fn test_store() -> EmployeeStore {
    EmployeeStore::new(test_database().await.get_connection())
}

fn fields(name: &str, salary: f64, role: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        base_salary: salary,
        address: Some("1 Main St".to_string()),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn test_create_then_find_round_trips() {
    let store = test_store().await;

    let created = store.create(fields("Ana", 50000.0, "Engineer")).await.unwrap();
    let found = store.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.name, "Ana");
    assert_eq!(found.base_salary, 50000.0);
    assert_eq!(found.address.as_deref(), Some("1 Main St"));
}

#[tokio::test]
async fn test_ids_are_unique() {
    let store = test_store().await;

    let a = store.create(fields("Ana", 1.0, "A")).await.unwrap();
    let b = store.create(fields("Bo", 2.0, "B")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_missing_id_finds_nothing() {
    let store = test_store().await;
    assert!(store.find_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ids_beyond_32_bits_find_nothing() {
    let store = test_store().await;
    assert!(store.find_by_id(3_000_000_000).await.unwrap().is_none());
    assert_eq!(store.delete(3_000_000_000).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let store = test_store().await;
    let created = store.create(fields("Ana", 50000.0, "Engineer")).await.unwrap();

    let replacement = NewEmployee {
        address: None,
        ..fields("Ana", 55000.0, "Senior Engineer")
    };
    let rows = store.update(created.id, replacement).await.unwrap();
    assert_eq!(rows, 1);

    let found = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.base_salary, 55000.0);
    assert_eq!(found.role, "Senior Engineer");
    assert_eq!(found.address, None);
}

#[tokio::test]
async fn test_update_of_missing_id_affects_no_rows() {
    let store = test_store().await;

    let rows = store.update(999, fields("Ghost", 1.0, "None")).await.unwrap();

    assert_eq!(rows, 0);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let store = test_store().await;
    let keep = store.create(fields("Ana", 1.0, "A")).await.unwrap();
    let gone = store.create(fields("Bo", 2.0, "B")).await.unwrap();

    assert_eq!(store.delete(gone.id).await.unwrap(), 1);
    assert!(store.find_by_id(gone.id).await.unwrap().is_none());

    let remaining = store.list().await.unwrap();
    assert_eq!(remaining, vec![keep]);
}

#[tokio::test]
async fn test_ping() {
    let store = test_store().await;
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn test_migration_status_reports_applied() {
    let db = test_database().await;
    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 1);
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_http_scenario_against_sqlite() {
    let db = test_database().await;
    let app = create_router(AppState::from_database(&db));

    let request = |method: Method, uri: String, body: Option<Value>| {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        builder
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap()
    };

    let payload = json!({
        "name": "Ana",
        "baseSalary": 50000,
        "address": "1 Main St",
        "role": "Engineer"
    });
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/api/employees".to_string(), Some(payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(request(Method::GET, location.clone(), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let employee: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(employee["name"], "Ana");
    assert_eq!(employee["baseSalary"], 50000.0);

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, location.clone(), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(Method::GET, location, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Store is shared with the router
    let store: Arc<dyn EmployeeRepository> = Arc::new(EmployeeStore::new(db.get_connection()));
    assert!(store.list().await.unwrap().is_empty());
}
