//! Repository trait definitions.
//!
//! Services depend on these interfaces; the `postgres` module provides the
//! SQLx-backed implementations.

use async_trait::async_trait;
use tasklane_core::{
    Page, PageRequest, Project, ProjectId, Task, TaskFilter, TaskId, TasklaneResult, User, UserId,
};

/// User data access interface.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> TasklaneResult<Option<User>>;

    /// Checks whether an email is already registered.
    async fn exists_by_email(&self, email: &str) -> TasklaneResult<bool>;

    /// Persists a new user.
    async fn save(&self, user: &User) -> TasklaneResult<User>;
}

/// Project data access interface.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persists a new project.
    async fn save(&self, project: &Project) -> TasklaneResult<Project>;

    /// Returns all projects owned by a user.
    async fn find_by_user(&self, user_id: UserId) -> TasklaneResult<Vec<Project>>;

    /// Returns a page of projects owned by a user.
    async fn find_by_user_paginated(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> TasklaneResult<Page<Project>>;

    /// Finds a project by id, scoped to its owner.
    ///
    /// Returns `None` when the project does not exist or belongs to a
    /// different user; callers cannot distinguish the two.
    async fn find_by_id_and_user(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> TasklaneResult<Option<Project>>;
}

/// Task data access interface.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task.
    async fn save(&self, task: &Task) -> TasklaneResult<Task>;

    /// Updates an existing task.
    async fn update(&self, task: &Task) -> TasklaneResult<Task>;

    /// Finds a task by id.
    async fn find_by_id(&self, id: TaskId) -> TasklaneResult<Option<Task>>;

    /// Returns all tasks in a project.
    async fn find_by_project(&self, project_id: ProjectId) -> TasklaneResult<Vec<Task>>;

    /// Returns a page of tasks in a project, optionally filtered by title
    /// substring and completion state.
    async fn find_by_project_paginated(
        &self,
        project_id: ProjectId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TasklaneResult<Page<Task>>;

    /// Deletes a task. Returns `true` if a row was removed.
    async fn delete(&self, id: TaskId) -> TasklaneResult<bool>;

    /// Counts all tasks in a project.
    async fn count_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64>;

    /// Counts completed tasks in a project.
    async fn count_completed_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64>;
}
