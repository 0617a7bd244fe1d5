//! Project-related DTOs.

use serde::{Deserialize, Serialize};
use tasklane_core::ProjectId;
use validator::Validate;

/// Request body for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
}

/// Project representation returned to clients.
///
/// The owner is implied by the authenticated caller and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
}

/// Completion progress for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub progress_percentage: f64,
}

impl ProgressResponse {
    /// Computes progress from task counts.
    ///
    /// An empty project reports exactly 0.0 rather than NaN.
    #[must_use]
    pub fn from_counts(total_tasks: u64, completed_tasks: u64) -> Self {
        let progress_percentage = if total_tasks > 0 {
            completed_tasks as f64 / total_tasks as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_tasks,
            completed_tasks,
            progress_percentage,
        }
    }
}
