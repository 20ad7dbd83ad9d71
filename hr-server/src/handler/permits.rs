//! Permit API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::common::{AppResult, ValidJson};
use crate::db::models::{Permit, PermitCreate, PermitUpdate};
use crate::db::repository::PermitRepository;
use crate::server::ServerState;

/// List all permits
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Permit>> {
    let repo = PermitRepository::new(state.get_db());
    Json(repo.find_all())
}

/// File a new permit request
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PermitCreate>,
) -> AppResult<(StatusCode, Json<Permit>)> {
    let repo = PermitRepository::new(state.get_db());
    let permit = repo.create(payload)?;
    tracing::info!(permit_id = %permit.id, worker_id = %permit.worker_id, "Permit created");
    Ok((StatusCode::CREATED, Json(permit)))
}

/// Update a permit (field correction or status transition)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    ValidJson(payload): ValidJson<PermitUpdate>,
) -> AppResult<Json<Permit>> {
    let repo = PermitRepository::new(state.get_db());
    let permit = repo.update(id, payload)?;
    tracing::info!(permit_id = %id, status = ?permit.status, "Permit updated");
    Ok(Json(permit))
}
