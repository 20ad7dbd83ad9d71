//! Org-Chart Handler
//!
//! Serves the department grouping with each worker's resolved
//! immediate supervisor, derived from the current worker snapshot.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::models::Worker;
use crate::db::repository::WorkerRepository;
use crate::hierarchy;
use crate::server::ServerState;

/// One worker in the chart, with the supervisor edge resolved
#[derive(Debug, Serialize)]
pub struct OrgChartEntry {
    pub worker: Worker,
    pub supervisor: Option<Worker>,
}

/// Workers of one department, in encounter order
#[derive(Debug, Serialize)]
pub struct DepartmentGroup {
    pub department: String,
    pub workers: Vec<OrgChartEntry>,
}

/// Render the org chart from the current snapshot
pub async fn get(State(state): State<ServerState>) -> Json<Vec<DepartmentGroup>> {
    let snapshot = WorkerRepository::new(state.get_db()).find_all();

    let groups = hierarchy::group_by_department(&snapshot)
        .into_iter()
        .map(|(department, members)| DepartmentGroup {
            department,
            workers: members
                .into_iter()
                .map(|worker| OrgChartEntry {
                    worker: worker.clone(),
                    supervisor: hierarchy::supervisor_of(worker, &snapshot).cloned(),
                })
                .collect(),
        })
        .collect();

    Json(groups)
}
