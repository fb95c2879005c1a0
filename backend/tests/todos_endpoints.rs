//! End-to-end HTTP tests for the todo endpoints.
//!
//! Requests go through the real handlers, service and SQLite repository, with
//! a fresh database file per test.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use backend::Trace;
use backend::domain::TodoService;
use backend::inbound::http::configure;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselTodoRepository;
use backend::test_support::TempDatabase;

async fn test_app(
    db: &TempDatabase,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = Arc::new(TodoService::new(
        Arc::new(DieselTodoRepository::new(db.pool().clone())),
        Arc::new(DefaultClock),
    ));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HealthState::new()))
            .app_data(web::Data::new(HttpState::from_service(service)))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn temp_db() -> TempDatabase {
    TempDatabase::new().await.expect("temporary database")
}

async fn create(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    body: Value,
) -> Value {
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/todos")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    actix_test::read_body_json(res).await
}

async fn list(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
) -> Vec<Value> {
    actix_test::call_and_read_body_json(
        app,
        actix_test::TestRequest::get().uri("/todos").to_request(),
    )
    .await
}

#[rstest]
#[actix_web::test]
async fn create_returns_201_with_assigned_id_and_timestamp() {
    let db = temp_db().await;
    let app = test_app(&db).await;
    let before = Utc::now();

    let body = create(
        &app,
        json!({"title": "Test Todo", "description": "Test Description", "done": false}),
    )
    .await;

    assert!(body["id"].is_i64());
    assert_eq!(body["title"], "Test Todo");
    assert_eq!(body["description"], "Test Description");
    assert_eq!(body["done"], false);
    let created_at = DateTime::parse_from_rfc3339(body["created_at"].as_str().expect("string"))
        .expect("RFC 3339 timestamp");
    assert!(created_at.with_timezone(&Utc) >= before - chrono::Duration::seconds(1));
}

#[rstest]
#[actix_web::test]
async fn create_defaults_optional_fields() {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let body = create(&app, json!({"title": "Only a title"})).await;

    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["done"], false);
}

#[rstest]
#[actix_web::test]
async fn list_returns_every_todo_in_creation_order() {
    let db = temp_db().await;
    let app = test_app(&db).await;
    assert!(list(&app).await.is_empty());

    let mut created_ids = Vec::new();
    for title in ["one", "two", "three"] {
        let body = create(&app, json!({"title": title})).await;
        created_ids.push(body["id"].as_i64().expect("integer id"));
    }

    let listed = list(&app).await;
    let listed_ids: Vec<i64> = listed
        .iter()
        .map(|todo| todo["id"].as_i64().expect("integer id"))
        .collect();
    assert_eq!(listed_ids, created_ids);
}

#[rstest]
#[actix_web::test]
async fn get_unknown_id_is_404_with_envelope() {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/todos/99999").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let trace_header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Todo not found");
    assert_eq!(body["traceId"], trace_header);
}

#[rstest]
#[actix_web::test]
async fn patch_merges_present_fields() {
    let db = temp_db().await;
    let app = test_app(&db).await;
    let created = create(
        &app,
        json!({"title": "Update Me", "description": "Old desc", "done": false}),
    )
    .await;
    let uri = format!("/todos/{}", created["id"]);

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"title": "Updated Title", "done": true}))
            .to_request(),
    )
    .await;
    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;

    assert_eq!(updated["title"], "Updated Title");
    assert_eq!(updated["description"], "Old desc");
    assert_eq!(updated["done"], true);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(fetched, updated);
}

#[rstest]
#[actix_web::test]
async fn patch_unknown_id_is_404() {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri("/todos/99999")
            .set_json(json!({"done": true}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_returns_204_then_get_is_404() {
    let db = temp_db().await;
    let app = test_app(&db).await;
    let created = create(&app, json!({"title": "Delete Me"})).await;
    let uri = format!("/todos/{}", created["id"]);

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(actix_test::read_body(deleted).await.is_empty());

    let fetched = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request())
        .await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);

    let again = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"title": ""}))]
#[case(json!({"title": "   "}))]
#[case(json!({"title": null}))]
#[case(json!({"title": 42}))]
#[case(json!({"title": "ok", "done": "nope"}))]
#[actix_web::test]
async fn invalid_create_is_422_and_stores_nothing(#[case] body: Value) {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/todos")
            .set_json(body)
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let envelope: Value = actix_test::read_body_json(res).await;
    assert_eq!(envelope["code"], "invalid_request");
    assert!(list(&app).await.is_empty());
}

#[rstest]
#[actix_web::test]
async fn patch_with_blank_title_is_422_and_leaves_row_unchanged() {
    let db = temp_db().await;
    let app = test_app(&db).await;
    let created = create(&app, json!({"title": "Keep Me"})).await;
    let uri = format!("/todos/{}", created["id"]);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"title": "", "done": true}))
            .to_request(),
    )
    .await;
    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&uri).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn non_integer_id_is_422() {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/todos/not-a-number").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[actix_web::test]
async fn health_reports_ok() {
    let db = temp_db().await;
    let app = test_app(&db).await;

    let body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/health").to_request(),
    )
    .await;

    assert_eq!(body, json!({"status": "ok"}));
}
