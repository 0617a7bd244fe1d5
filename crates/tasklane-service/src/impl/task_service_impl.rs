//! Task service implementation.

use crate::dto::{TaskRequest, TaskResponse};
use crate::project_service::ProjectService;
use crate::task_service::TaskService;
use async_trait::async_trait;
use std::sync::Arc;
use tasklane_core::{
    Page, PageRequest, ProjectId, Task, TaskFilter, TaskId, TasklaneError, TasklaneResult,
    ValidateExt,
};
use tasklane_repository::TaskRepository;
use tracing::{debug, info};

/// Generic task service implementation.
///
/// Delegates all ownership checks to the project service gate.
pub struct TaskServiceImpl<T: TaskRepository> {
    task_repository: Arc<T>,
    project_service: Arc<dyn ProjectService>,
}

impl<T: TaskRepository> TaskServiceImpl<T> {
    /// Creates a new task service.
    pub fn new(task_repository: Arc<T>, project_service: Arc<dyn ProjectService>) -> Self {
        Self {
            task_repository,
            project_service,
        }
    }

    /// Resolves a task, re-validating ownership through the project gate.
    ///
    /// A task whose project belongs to someone else fails with `NotFound`
    /// even though the task row itself exists.
    async fn get_task_entity(&self, user_email: &str, task_id: TaskId) -> TasklaneResult<Task> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| TasklaneError::not_found("Task", task_id))?;

        self.project_service
            .get_project_entity(user_email, task.project_id)
            .await?;

        Ok(task)
    }
}

#[async_trait]
impl<T: TaskRepository + 'static> TaskService for TaskServiceImpl<T> {
    async fn create_task(
        &self,
        user_email: &str,
        project_id: ProjectId,
        request: TaskRequest,
    ) -> TasklaneResult<TaskResponse> {
        debug!("Creating task in project {}: {}", project_id, request.title);

        request.validate_request()?;

        let project = self
            .project_service
            .get_project_entity(user_email, project_id)
            .await?;

        // New tasks always start incomplete.
        let task = Task::new(
            request.title,
            request.description,
            request.due_date,
            project.id,
        );
        let saved = self.task_repository.save(&task).await?;

        info!("Task created: {}", saved.id);
        Ok(TaskResponse::from(saved))
    }

    async fn get_project_tasks(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<Vec<TaskResponse>> {
        debug!("Listing tasks for project {}", project_id);

        let project = self
            .project_service
            .get_project_entity(user_email, project_id)
            .await?;

        let tasks = self.task_repository.find_by_project(project.id).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    async fn get_project_tasks_paginated(
        &self,
        user_email: &str,
        project_id: ProjectId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TasklaneResult<Page<TaskResponse>> {
        debug!(
            "Listing tasks for project {}, page: {}, size: {}",
            project_id, page.page, page.size
        );

        let project = self
            .project_service
            .get_project_entity(user_email, project_id)
            .await?;

        let tasks = self
            .task_repository
            .find_by_project_paginated(project.id, filter, page)
            .await?;

        Ok(tasks.map(TaskResponse::from))
    }

    async fn complete_task(
        &self,
        user_email: &str,
        task_id: TaskId,
    ) -> TasklaneResult<TaskResponse> {
        debug!("Completing task {}", task_id);

        let mut task = self.get_task_entity(user_email, task_id).await?;
        task.complete();
        let updated = self.task_repository.update(&task).await?;

        info!("Task completed: {}", task_id);
        Ok(TaskResponse::from(updated))
    }

    async fn toggle_task_completion(
        &self,
        user_email: &str,
        task_id: TaskId,
    ) -> TasklaneResult<TaskResponse> {
        debug!("Toggling completion for task {}", task_id);

        let mut task = self.get_task_entity(user_email, task_id).await?;
        task.toggle();
        let updated = self.task_repository.update(&task).await?;

        info!("Task toggled: {} -> {}", task_id, updated.completed);
        Ok(TaskResponse::from(updated))
    }

    async fn delete_task(&self, user_email: &str, task_id: TaskId) -> TasklaneResult<()> {
        debug!("Deleting task {}", task_id);

        let task = self.get_task_entity(user_email, task_id).await?;

        let deleted = self.task_repository.delete(task.id).await?;
        if !deleted {
            return Err(TasklaneError::not_found("Task", task_id));
        }

        info!("Task deleted: {}", task_id);
        Ok(())
    }
}

impl<T: TaskRepository> std::fmt::Debug for TaskServiceImpl<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskServiceImpl").finish_non_exhaustive()
    }
}
