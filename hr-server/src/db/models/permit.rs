//! Permit Model
//!
//! Leave-request record tied to a worker, carrying a lifecycle status.
//! Status transitions are forward-only: a pending permit can be
//! approved or rejected, after which it is terminal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Kind of leave being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitType {
    Vacation,
    Sick,
    Personal,
}

/// Lifecycle status of a permit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl PermitStatus {
    /// Whether the transition to `next` is allowed.
    ///
    /// Same-status updates are accepted as no-ops; otherwise only a
    /// pending permit may move, to approved or rejected.
    pub fn can_transition_to(self, next: PermitStatus) -> bool {
        self == next || self == PermitStatus::Pending
    }
}

/// Leave-permit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
    pub id: u32,
    pub worker_id: u32,
    pub permit_type: PermitType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: PermitStatus,
    pub supervisor_id: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// Create permit payload. Status and creation time are assigned by the
/// store: new permits always start out pending.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitCreate {
    pub worker_id: u32,
    pub permit_type: PermitType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub supervisor_id: Option<u32>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitUpdate {
    pub worker_id: Option<u32>,
    pub permit_type: Option<PermitType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub status: Option<PermitStatus>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub supervisor_id: Option<Option<u32>>,
}

impl Permit {
    /// Merge a partial update over this record. `created_at` is
    /// immutable and always preserved.
    pub fn merged(&self, update: PermitUpdate) -> Permit {
        Permit {
            id: self.id,
            worker_id: update.worker_id.unwrap_or(self.worker_id),
            permit_type: update.permit_type.unwrap_or(self.permit_type),
            start_date: update.start_date.unwrap_or(self.start_date),
            end_date: update.end_date.unwrap_or(self.end_date),
            reason: update.reason.unwrap_or_else(|| self.reason.clone()),
            status: update.status.unwrap_or(self.status),
            supervisor_id: update.supervisor_id.unwrap_or(self.supervisor_id),
            created_at: self.created_at,
        }
    }
}
