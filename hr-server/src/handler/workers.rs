//! Worker API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::common::{AppResult, ValidJson};
use crate::db::models::{Worker, WorkerCreate, WorkerUpdate};
use crate::db::repository::WorkerRepository;
use crate::server::ServerState;

/// List all workers
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Worker>> {
    let repo = WorkerRepository::new(state.get_db());
    Json(repo.find_all())
}

/// Create a new worker
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<WorkerCreate>,
) -> AppResult<(StatusCode, Json<Worker>)> {
    let repo = WorkerRepository::new(state.get_db());
    let worker = repo.create(payload)?;
    tracing::info!(worker_id = %worker.id, "Worker created");
    Ok((StatusCode::CREATED, Json(worker)))
}

/// Update a worker
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    ValidJson(payload): ValidJson<WorkerUpdate>,
) -> AppResult<Json<Worker>> {
    let repo = WorkerRepository::new(state.get_db());
    let worker = repo.update(id, payload)?;
    tracing::info!(worker_id = %id, "Worker updated");
    Ok(Json(worker))
}

/// Delete a worker (idempotent: unknown ids also answer 204)
pub async fn delete(State(state): State<ServerState>, Path(id): Path<u32>) -> StatusCode {
    let repo = WorkerRepository::new(state.get_db());
    if repo.delete(id) {
        tracing::info!(worker_id = %id, "Worker deleted");
    }
    StatusCode::NO_CONTENT
}
