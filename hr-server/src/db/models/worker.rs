//! Worker Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Employee record with a department, role and optional supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: u32,
    pub name: String,
    pub lastname: String,
    pub department: String,
    pub role: String,
    pub supervisor_id: Option<u32>,
}

/// Create worker payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerCreate {
    pub name: String,
    pub lastname: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub supervisor_id: Option<u32>,
}

/// Partial update payload. `supervisor_id` distinguishes "absent"
/// (leave as is) from explicit `null` (clear the reference).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerUpdate {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub supervisor_id: Option<Option<u32>>,
}

impl Worker {
    /// Merge a partial update over this record, field by field.
    pub fn merged(&self, update: WorkerUpdate) -> Worker {
        Worker {
            id: self.id,
            name: update.name.unwrap_or_else(|| self.name.clone()),
            lastname: update.lastname.unwrap_or_else(|| self.lastname.clone()),
            department: update.department.unwrap_or_else(|| self.department.clone()),
            role: update.role.unwrap_or_else(|| self.role.clone()),
            supervisor_id: update.supervisor_id.unwrap_or(self.supervisor_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Worker {
        Worker {
            id: 7,
            name: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            department: "Engineering".to_string(),
            role: "Developer".to_string(),
            supervisor_id: Some(1),
        }
    }

    #[test]
    fn merged_replaces_only_given_fields() {
        let update = WorkerUpdate {
            department: Some("Research".to_string()),
            ..Default::default()
        };
        let merged = sample().merged(update);
        assert_eq!(merged.department, "Research");
        assert_eq!(merged.name, "Ada");
        assert_eq!(merged.supervisor_id, Some(1));
    }

    #[test]
    fn explicit_null_clears_supervisor() {
        let update: WorkerUpdate = serde_json::from_str(r#"{"supervisorId": null}"#).unwrap();
        assert_eq!(update.supervisor_id, Some(None));
        let merged = sample().merged(update);
        assert_eq!(merged.supervisor_id, None);
    }

    #[test]
    fn absent_supervisor_field_is_left_unchanged() {
        let update: WorkerUpdate = serde_json::from_str(r#"{"name": "Grace"}"#).unwrap();
        assert_eq!(update.supervisor_id, None);
        let merged = sample().merged(update);
        assert_eq!(merged.supervisor_id, Some(1));
        assert_eq!(merged.name, "Grace");
    }
}
