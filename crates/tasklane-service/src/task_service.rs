//! Task service trait definition.

use crate::dto::{TaskRequest, TaskResponse};
use async_trait::async_trait;
use tasklane_core::{Page, PageRequest, ProjectId, TaskFilter, TaskId, TasklaneResult};

/// Task service trait.
///
/// Task access always flows through the project ownership gate, including
/// operations addressed by task id alone.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Creates a new task in a project owned by the caller.
    ///
    /// New tasks always start incomplete.
    async fn create_task(
        &self,
        user_email: &str,
        project_id: ProjectId,
        request: TaskRequest,
    ) -> TasklaneResult<TaskResponse>;

    /// Lists all tasks in a project owned by the caller.
    async fn get_project_tasks(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<Vec<TaskResponse>>;

    /// Lists a page of tasks in a project, optionally filtered by title
    /// substring and completion state.
    async fn get_project_tasks_paginated(
        &self,
        user_email: &str,
        project_id: ProjectId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TasklaneResult<Page<TaskResponse>>;

    /// Marks a task complete. Idempotent.
    async fn complete_task(
        &self,
        user_email: &str,
        task_id: TaskId,
    ) -> TasklaneResult<TaskResponse>;

    /// Flips a task's completion flag.
    async fn toggle_task_completion(
        &self,
        user_email: &str,
        task_id: TaskId,
    ) -> TasklaneResult<TaskResponse>;

    /// Deletes a task owned by the caller.
    async fn delete_task(&self, user_email: &str, task_id: TaskId) -> TasklaneResult<()>;
}
