//! Project service implementation.

use crate::dto::{ProgressResponse, ProjectRequest, ProjectResponse};
use crate::project_service::ProjectService;
use async_trait::async_trait;
use std::sync::Arc;
use tasklane_core::{
    Page, PageRequest, Project, ProjectId, TasklaneError, TasklaneResult, User, ValidateExt,
};
use tasklane_repository::{ProjectRepository, TaskRepository, UserRepository};
use tracing::{debug, info};

/// Generic project service implementation.
pub struct ProjectServiceImpl<U, P, T>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
{
    user_repository: Arc<U>,
    project_repository: Arc<P>,
    task_repository: Arc<T>,
}

impl<U, P, T> ProjectServiceImpl<U, P, T>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Creates a new project service.
    pub fn new(
        user_repository: Arc<U>,
        project_repository: Arc<P>,
        task_repository: Arc<T>,
    ) -> Self {
        Self {
            user_repository,
            project_repository,
            task_repository,
        }
    }

    /// Resolves the caller to a user entity.
    async fn resolve_user(&self, email: &str) -> TasklaneResult<User> {
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| TasklaneError::not_found("User", email))
    }
}

#[async_trait]
impl<U, P, T> ProjectService for ProjectServiceImpl<U, P, T>
where
    U: UserRepository + 'static,
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
{
    async fn create_project(
        &self,
        user_email: &str,
        request: ProjectRequest,
    ) -> TasklaneResult<ProjectResponse> {
        debug!("Creating project for {}: {}", user_email, request.title);

        request.validate_request()?;

        let user = self.resolve_user(user_email).await?;

        let project = Project::new(request.title, request.description, user.id);
        let saved = self.project_repository.save(&project).await?;

        info!("Project created: {}", saved.id);
        Ok(ProjectResponse::from(saved))
    }

    async fn get_user_projects(&self, user_email: &str) -> TasklaneResult<Vec<ProjectResponse>> {
        debug!("Listing projects for {}", user_email);

        let user = self.resolve_user(user_email).await?;
        let projects = self.project_repository.find_by_user(user.id).await?;

        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    async fn get_user_projects_paginated(
        &self,
        user_email: &str,
        page: PageRequest,
    ) -> TasklaneResult<Page<ProjectResponse>> {
        debug!(
            "Listing projects for {}, page: {}, size: {}",
            user_email, page.page, page.size
        );

        let user = self.resolve_user(user_email).await?;
        let projects = self
            .project_repository
            .find_by_user_paginated(user.id, page)
            .await?;

        Ok(projects.map(ProjectResponse::from))
    }

    async fn get_project_by_id(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<ProjectResponse> {
        let project = self.get_project_entity(user_email, project_id).await?;
        Ok(ProjectResponse::from(project))
    }

    async fn get_project_entity(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<Project> {
        debug!("Resolving project {} for {}", project_id, user_email);

        let user = self.resolve_user(user_email).await?;

        self.project_repository
            .find_by_id_and_user(project_id, user.id)
            .await?
            .ok_or_else(|| TasklaneError::not_found("Project", project_id))
    }

    async fn get_project_progress(
        &self,
        user_email: &str,
        project_id: ProjectId,
    ) -> TasklaneResult<ProgressResponse> {
        debug!("Computing progress for project {}", project_id);

        // Ownership gate first; counts only run against the caller's own
        // project.
        let project = self.get_project_entity(user_email, project_id).await?;

        let total = self.task_repository.count_by_project(project.id).await?;
        let completed = self
            .task_repository
            .count_completed_by_project(project.id)
            .await?;

        Ok(ProgressResponse::from_counts(total, completed))
    }
}

impl<U, P, T> std::fmt::Debug for ProjectServiceImpl<U, P, T>
where
    U: UserRepository,
    P: ProjectRepository,
    T: TaskRepository,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectServiceImpl").finish_non_exhaustive()
    }
}
