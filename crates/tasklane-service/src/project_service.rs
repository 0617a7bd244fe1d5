//! Project service trait definition.

use crate::dto::{ProgressResponse, ProjectRequest, ProjectResponse};
use async_trait::async_trait;
use tasklane_core::{Page, PageRequest, Project, ProjectId, TasklaneResult};

/// Project service trait.
///
/// Every operation takes the authenticated caller's email; projects are
/// only ever visible to their owner.
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Creates a new project owned by the caller.
    async fn create_project(
        &self,
        user_email: &str,
        request: ProjectRequest,
    ) -> TasklaneResult<ProjectResponse>;

    /// Lists all projects owned by the caller.
    async fn get_user_projects(&self, user_email: &str) -> TasklaneResult<Vec<ProjectResponse>>;

    /// Lists a page of projects owned by the caller.
    async fn get_user_projects_paginated(
        &self,
        user_email: &str,
        page: PageRequest,
    ) -> TasklaneResult<Page<ProjectResponse>>;

    /// Gets a single project owned by the caller.
    async fn get_project_by_id(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<ProjectResponse>;

    /// Resolves a project entity, enforcing ownership.
    ///
    /// This is the authorization gate shared with the task service: a
    /// project that exists but belongs to someone else fails with the same
    /// `NotFound` as one that does not exist.
    async fn get_project_entity(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<Project>;

    /// Computes task completion progress for a project.
    async fn get_project_progress(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<ProgressResponse>;
}
