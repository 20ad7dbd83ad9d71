//! Health Check Handler

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe; public route
pub async fn check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
