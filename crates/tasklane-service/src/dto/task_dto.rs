//! Task-related DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tasklane_core::{ProjectId, TaskId};
use validator::Validate;

/// Request body for creating a task.
///
/// Any `completed` key a client sends is ignored; new tasks always start
/// incomplete.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,

    pub due_date: NaiveDate,
}

/// Task representation returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub project_id: ProjectId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_request_valid() {
        let request = TaskRequest {
            title: "Write launch checklist".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_task_request_empty_title() {
        let request = TaskRequest {
            title: "".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_task_request_parses_iso_due_date() {
        let json = r#"{"title": "Ship it", "dueDate": "2025-07-01"}"#;
        let request: TaskRequest = serde_json::from_str(json).unwrap();

        assert_eq!(
            request.due_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_task_request_missing_due_date_rejected() {
        let json = r#"{"title": "No date"}"#;
        let result: Result<TaskRequest, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_task_response_wire_shape_is_camel_case() {
        let response = TaskResponse {
            id: TaskId::new(),
            title: "Ship it".to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            completed: false,
            project_id: ProjectId::new(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("dueDate").is_some());
        assert!(json.get("projectId").is_some());
        assert_eq!(json["dueDate"], "2025-07-01");
    }
}
