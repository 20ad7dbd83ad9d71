//! End-to-end API tests
//!
//! Drives the fully assembled router through oneshot calls, without
//! going through the network stack.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use hr_server::routes::build_app;
use hr_server::{Config, ServerState};

fn test_app() -> (ServerState, Router) {
    let config = Config::from_env();
    let state = ServerState::initialize(&config);
    let app = build_app(&state).with_state(state.clone());
    (state, app)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Register a fresh user and return its bearer token.
async fn auth_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/register",
        None,
        Some(json!({"username": "tester", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["token"].as_str().unwrap().to_string()
}

fn worker_payload(name: &str, department: &str) -> Value {
    json!({
        "name": name,
        "lastname": "Rossi",
        "department": department,
        "role": "Developer"
    })
}

#[tokio::test]
async fn health_is_public() {
    let (_state, app) = test_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn api_requires_authentication() {
    let (_state, app) = test_app();
    let (status, _) = send(&app, "GET", "/api/workers", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/workers", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_login_and_current_user() {
    let (_state, app) = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({"username": "mario", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["username"], "mario");
    assert_eq!(body["data"]["user"]["role"], "employee");

    // Duplicate username
    let (status, _) = send(
        &app,
        "POST",
        "/api/register",
        None,
        Some(json!({"username": "mario", "password": "other"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Wrong password
    let (status, _) = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": "mario", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Correct login
    let (status, body) = send(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": "mario", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/api/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "mario");

    let (status, _) = send(&app, "POST", "/api/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn worker_crud_status_matrix() {
    let (_state, app) = test_app();
    let token = auth_token(&app).await;

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/workers",
        Some(&token),
        Some(worker_payload("Ada", "Engineering")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_u64().unwrap();
    assert_eq!(created["department"], "Engineering");
    assert_eq!(created["supervisorId"], Value::Null);

    // List
    let (status, listed) = send(&app, "GET", "/api/workers", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Update one field, others unchanged
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/workers/{}", id),
        Some(&token),
        Some(json!({"department": "Research"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department"], "Research");
    assert_eq!(updated["name"], "Ada");

    // Update unknown id
    let (status, _) = send(
        &app,
        "PUT",
        "/api/workers/9999",
        Some(&token),
        Some(json!({"department": "Research"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Malformed body
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/workers/{}", id),
        Some(&token),
        Some(json!({"name": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Delete is idempotent: 204 both times
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/workers/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/workers/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Updating the deleted worker now fails
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/workers/{}", id),
        Some(&token),
        Some(json!({"department": "Research"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn worker_create_validation() {
    let (_state, app) = test_app();
    let token = auth_token(&app).await;

    // Missing required field
    let (status, _) = send(
        &app,
        "POST",
        "/api/workers",
        Some(&token),
        Some(json!({"name": "Ada"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Supervisor reference must resolve
    let mut payload = worker_payload("Ada", "Engineering");
    payload["supervisorId"] = json!(42);
    let (status, _) = send(&app, "POST", "/api/workers", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn permit_lifecycle_over_http() {
    let (_state, app) = test_app();
    let token = auth_token(&app).await;

    let (_, worker) = send(
        &app,
        "POST",
        "/api/workers",
        Some(&token),
        Some(worker_payload("Ada", "Engineering")),
    )
    .await;
    let worker_id = worker["id"].as_u64().unwrap();

    // Create: stored pending with a creation timestamp
    let (status, permit) = send(
        &app,
        "POST",
        "/api/permits",
        Some(&token),
        Some(json!({
            "workerId": worker_id,
            "permitType": "vacation",
            "startDate": "2026-09-01",
            "endDate": "2026-09-05",
            "reason": "Summer break"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(permit["status"], "pending");
    assert!(permit["createdAt"].is_string());
    let permit_id = permit["id"].as_u64().unwrap();

    // Reversed dates are rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/permits",
        Some(&token),
        Some(json!({
            "workerId": worker_id,
            "permitType": "sick",
            "startDate": "2026-09-05",
            "endDate": "2026-09-01",
            "reason": "Flu"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown worker is rejected
    let (status, _) = send(
        &app,
        "POST",
        "/api/permits",
        Some(&token),
        Some(json!({
            "workerId": 9999,
            "permitType": "sick",
            "startDate": "2026-09-01",
            "endDate": "2026-09-02",
            "reason": "Flu"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown permit id
    let (status, _) = send(
        &app,
        "PUT",
        "/api/permits/9999",
        Some(&token),
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Approve, then try to reopen
    let (status, approved) = send(
        &app,
        "PUT",
        &format!("/api/permits/{}", permit_id),
        Some(&token),
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/permits/{}", permit_id),
        Some(&token),
        Some(json!({"status": "pending"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, listed) = send(&app, "GET", "/api/permits", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["status"], "approved");
}

#[tokio::test]
async fn org_chart_groups_departments_and_resolves_supervisors() {
    let (_state, app) = test_app();
    let token = auth_token(&app).await;

    let (_, boss) = send(
        &app,
        "POST",
        "/api/workers",
        Some(&token),
        Some(worker_payload("Boss", "Eng")),
    )
    .await;
    let boss_id = boss["id"].as_u64().unwrap();

    send(
        &app,
        "POST",
        "/api/workers",
        Some(&token),
        Some(worker_payload("Harriet", "HR")),
    )
    .await;

    let mut report = worker_payload("Report", "Eng");
    report["supervisorId"] = json!(boss_id);
    send(&app, "POST", "/api/workers", Some(&token), Some(report)).await;

    let (status, chart) = send(&app, "GET", "/api/org-chart", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let groups = chart.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["department"], "Eng");
    assert_eq!(groups[0]["workers"].as_array().unwrap().len(), 2);
    assert_eq!(groups[1]["department"], "HR");

    let eng_workers = groups[0]["workers"].as_array().unwrap();
    assert_eq!(eng_workers[0]["worker"]["name"], "Boss");
    assert_eq!(eng_workers[0]["supervisor"], Value::Null);
    assert_eq!(eng_workers[1]["worker"]["name"], "Report");
    assert_eq!(eng_workers[1]["supervisor"]["name"], "Boss");
}

#[tokio::test]
async fn concurrent_worker_creates_get_distinct_ids() {
    use hr_server::db::models::WorkerCreate;
    use hr_server::db::repository::WorkerRepository;

    let (state, _app) = test_app();

    let mut handles = Vec::new();
    for n in 0..32 {
        let repo = WorkerRepository::new(state.get_db());
        handles.push(tokio::spawn(async move {
            repo.create(WorkerCreate {
                name: format!("Worker {}", n),
                lastname: "Rossi".to_string(),
                department: "Eng".to_string(),
                role: "Developer".to_string(),
                supervisor_id: None,
            })
            .unwrap()
            .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}
