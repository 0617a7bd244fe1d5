//! Entity-DTO mappers.

use crate::dto::{ProjectResponse, TaskResponse};
use tasklane_core::{Project, Task};

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            description: project.description,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            completed: task.completed,
            project_id: task.project_id,
        }
    }
}
