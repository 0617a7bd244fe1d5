//! Task entity.

use crate::{Entity, ProjectId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Task entity. A task belongs to exactly one project and moves between
/// incomplete and completed; the owning project never changes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: TaskId,

    /// Task title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Calendar date the task is due.
    pub due_date: NaiveDate,

    /// Completion flag. New tasks always start incomplete.
    pub completed: bool,

    /// Owning project.
    pub project_id: ProjectId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task under the given project.
    #[must_use]
    pub fn new(
        title: String,
        description: Option<String>,
        due_date: NaiveDate,
        project_id: ProjectId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title,
            description,
            due_date,
            completed: false,
            project_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the task as completed. Idempotent.
    pub fn complete(&mut self) {
        self.completed = true;
        self.updated_at = Utc::now();
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Utc::now();
    }
}

impl Entity<TaskId> for Task {
    fn id(&self) -> &TaskId {
        &self.id
    }
}
