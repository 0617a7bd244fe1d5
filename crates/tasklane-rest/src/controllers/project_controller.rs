//! Project controller.

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery, ValidatedJson},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tasklane_core::{Page, ProjectId, TasklaneError};
use tasklane_service::{ProgressResponse, ProjectRequest, ProjectResponse};
use tracing::debug;

/// Creates the project router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/paginated", get(list_projects_paginated))
        .route("/:project_id", get(get_project))
        .route("/:project_id/progress", get(get_project_progress))
}

/// Create a new project owned by the caller.
async fn create_project(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProjectResponse>>), AppError> {
    debug!("Create project request: {}", request.title);

    let response = state
        .project_service
        .create_project(user.email(), request)
        .await?;
    Ok(created(response))
}

/// List all of the caller's projects.
async fn list_projects(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Vec<ProjectResponse>> {
    debug!("List projects request");

    let response = state.project_service.get_user_projects(user.email()).await?;
    ok(response)
}

/// List the caller's projects, one page at a time.
async fn list_projects_paginated(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Page<ProjectResponse>> {
    debug!("List projects paginated request");

    let response = state
        .project_service
        .get_user_projects_paginated(user.email(), pagination.into())
        .await?;
    ok(response)
}

/// Get a single project by id.
async fn get_project(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(project_id): Path<String>,
) -> ApiResult<ProjectResponse> {
    debug!("Get project request: {}", project_id);

    let project_id = parse_project_id(&project_id)?;
    let response = state
        .project_service
        .get_project_by_id(user.email(), project_id)
        .await?;
    ok(response)
}

/// Get completion progress for a project.
async fn get_project_progress(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(project_id): Path<String>,
) -> ApiResult<ProgressResponse> {
    debug!("Get project progress request: {}", project_id);

    let project_id = parse_project_id(&project_id)?;
    let response = state
        .project_service
        .get_project_progress(user.email(), project_id)
        .await?;
    ok(response)
}

/// Helper to parse a project ID from a path parameter.
pub(crate) fn parse_project_id(id: &str) -> Result<ProjectId, AppError> {
    ProjectId::parse(id)
        .map_err(|_| AppError(TasklaneError::validation(format!("Invalid project ID: {}", id))))
}
