//! Worker Repository
//!
//! Enforces the supervision-graph invariants on top of the table:
//! a supervisor reference must resolve, a worker cannot supervise
//! itself, and no update may close a cycle in the reporting line.
//! Every check runs under the same write lock as the mutation it
//! guards, so concurrent writers cannot slip an invalid edge past it.

use std::collections::{BTreeMap, HashSet};

use super::{RepoError, RepoResult};
use crate::db::Database;
use crate::db::models::{Worker, WorkerCreate, WorkerUpdate};

#[derive(Clone)]
pub struct WorkerRepository {
    db: Database,
}

impl WorkerRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All workers in insertion order
    pub fn find_all(&self) -> Vec<Worker> {
        self.db.workers().all()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Worker> {
        self.db.workers().get(id)
    }

    /// Create a new worker. A supervisor reference, if given, must
    /// point at an existing worker.
    pub fn create(&self, data: WorkerCreate) -> RepoResult<Worker> {
        self.db.workers().insert_checked(
            |rows| match data.supervisor_id {
                Some(supervisor_id) if !rows.contains_key(&supervisor_id) => {
                    Err(unknown_supervisor(supervisor_id))
                }
                _ => Ok(()),
            },
            |id| Worker {
                id,
                name: data.name.clone(),
                lastname: data.lastname.clone(),
                department: data.department.clone(),
                role: data.role.clone(),
                supervisor_id: data.supervisor_id,
            },
        )
    }

    /// Apply a partial update. Fails with `NotFound` for an unknown id
    /// and leaves the store unchanged on any validation failure.
    pub fn update(&self, id: u32, data: WorkerUpdate) -> RepoResult<Worker> {
        self.db
            .workers()
            .replace_checked(id, move |existing, rows| {
                let merged = existing.merged(data);
                if let Some(supervisor_id) = merged.supervisor_id {
                    if supervisor_id == id {
                        return Err(RepoError::Validation(
                            "A worker cannot be their own supervisor".to_string(),
                        ));
                    }
                    if !rows.contains_key(&supervisor_id) {
                        return Err(unknown_supervisor(supervisor_id));
                    }
                    if closes_cycle(rows, id, supervisor_id) {
                        return Err(RepoError::Validation(format!(
                            "Supervisor {} would create a cycle in the reporting line",
                            supervisor_id
                        )));
                    }
                }
                Ok(merged)
            })
            .ok_or_else(|| RepoError::NotFound(format!("Worker {} not found", id)))?
    }

    /// Delete a worker. Idempotent: deleting an unknown id is not an
    /// error. Any worker that referenced the deleted one as supervisor
    /// has the reference cleared, under the same lock as the removal.
    pub fn delete(&self, id: u32) -> bool {
        self.db.workers().remove_and_sweep(id, |worker| {
            if worker.supervisor_id == Some(id) {
                worker.supervisor_id = None;
            }
        })
    }
}

fn unknown_supervisor(id: u32) -> RepoError {
    RepoError::Validation(format!(
        "Supervisor {} does not reference an existing worker",
        id
    ))
}

/// Walk the supervision chain starting at `supervisor_id` and check
/// whether it reaches `worker_id`. The visited set terminates the walk
/// even if the snapshot already contains a cycle.
fn closes_cycle(rows: &BTreeMap<u32, Worker>, worker_id: u32, supervisor_id: u32) -> bool {
    let mut visited = HashSet::new();
    let mut current = Some(supervisor_id);
    while let Some(id) = current {
        if id == worker_id {
            return true;
        }
        if !visited.insert(id) {
            return false;
        }
        current = rows.get(&id).and_then(|w| w.supervisor_id);
    }
    false
}
