//! Permit Repository
//!
//! Creation always starts a permit in the pending state; updates go
//! through the forward-only transition rule and the date-ordering
//! check, both applied under the permits write lock. References into
//! the workers table are validated ahead of the write; with one lock
//! per table that check is best effort against a concurrent worker
//! delete, which is tolerated the same way permits of an already
//! deleted worker are kept as historical records.

use chrono::Utc;

use super::{RepoError, RepoResult};
use crate::db::Database;
use crate::db::models::{Permit, PermitCreate, PermitStatus, PermitUpdate};

#[derive(Clone)]
pub struct PermitRepository {
    db: Database,
}

impl PermitRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All permits in insertion order
    pub fn find_all(&self) -> Vec<Permit> {
        self.db.permits().all()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Permit> {
        self.db.permits().get(id)
    }

    /// File a new permit. The referenced worker must exist, the date
    /// range must be ordered, and the stored record is always pending
    /// with `created_at` set to now.
    pub fn create(&self, data: PermitCreate) -> RepoResult<Permit> {
        self.require_worker(data.worker_id, "Worker")?;
        if let Some(supervisor_id) = data.supervisor_id {
            self.require_worker(supervisor_id, "Supervisor")?;
        }
        if data.start_date > data.end_date {
            return Err(date_order_error());
        }

        let now = Utc::now();
        let permit = self.db.permits().insert(|id| Permit {
            id,
            worker_id: data.worker_id,
            permit_type: data.permit_type,
            start_date: data.start_date,
            end_date: data.end_date,
            reason: data.reason.clone(),
            status: PermitStatus::Pending,
            supervisor_id: data.supervisor_id,
            created_at: now,
        });
        Ok(permit)
    }

    /// Apply a partial update. Fails with `NotFound` for an unknown id
    /// and leaves the store unchanged on any validation failure.
    pub fn update(&self, id: u32, data: PermitUpdate) -> RepoResult<Permit> {
        if let Some(worker_id) = data.worker_id {
            self.require_worker(worker_id, "Worker")?;
        }
        if let Some(Some(supervisor_id)) = data.supervisor_id {
            self.require_worker(supervisor_id, "Supervisor")?;
        }

        self.db
            .permits()
            .replace_checked(id, move |existing, _| {
                if let Some(next) = data.status
                    && !existing.status.can_transition_to(next)
                {
                    return Err(RepoError::Validation(format!(
                        "Permit status cannot move from {:?} to {:?}",
                        existing.status, next
                    )));
                }

                let merged = existing.merged(data);
                if merged.start_date > merged.end_date {
                    return Err(date_order_error());
                }
                Ok(merged)
            })
            .ok_or_else(|| RepoError::NotFound(format!("Permit {} not found", id)))?
    }

    fn require_worker(&self, id: u32, what: &str) -> RepoResult<()> {
        if self.db.workers().contains(id) {
            Ok(())
        } else {
            Err(RepoError::Validation(format!(
                "{} {} does not reference an existing worker",
                what, id
            )))
        }
    }
}

fn date_order_error() -> RepoError {
    RepoError::Validation("Start date must not be after end date".to_string())
}
