//! Task controller.
//!
//! Task creation and listing hang off the owning project's path; the
//! mutating endpoints address tasks directly by id.

use crate::{
    controllers::project_controller::parse_project_id,
    extractors::{AuthenticatedUser, PaginationQuery, TaskFilterQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use tasklane_core::{Page, TaskId, TasklaneError};
use tasklane_service::{TaskRequest, TaskResponse};
use tracing::debug;

/// Creates the task router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/:project_id/tasks",
            get(list_tasks).post(create_task),
        )
        .route("/projects/:project_id/tasks/paginated", get(list_tasks_paginated))
        .route("/tasks/:task_id/complete", put(complete_task))
        .route("/tasks/:task_id/toggle", put(toggle_task))
        .route("/tasks/:task_id", delete(delete_task))
}

/// Create a task in a project owned by the caller.
async fn create_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(project_id): Path<String>,
    ValidatedJson(request): ValidatedJson<TaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TaskResponse>>), AppError> {
    debug!("Create task request in project {}: {}", project_id, request.title);

    let project_id = parse_project_id(&project_id)?;
    let response = state
        .task_service
        .create_task(user.email(), project_id, request)
        .await?;
    Ok(created(response))
}

/// List all tasks in a project owned by the caller.
async fn list_tasks(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(project_id): Path<String>,
) -> ApiResult<Vec<TaskResponse>> {
    debug!("List tasks request for project {}", project_id);

    let project_id = parse_project_id(&project_id)?;
    let response = state
        .task_service
        .get_project_tasks(user.email(), project_id)
        .await?;
    ok(response)
}

/// List tasks in a project, one page at a time, with optional filters.
async fn list_tasks_paginated(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(project_id): Path<String>,
    Query(pagination): Query<PaginationQuery>,
    Query(filter): Query<TaskFilterQuery>,
) -> ApiResult<Page<TaskResponse>> {
    debug!("List tasks paginated request for project {}", project_id);

    let project_id = parse_project_id(&project_id)?;
    let response = state
        .task_service
        .get_project_tasks_paginated(user.email(), project_id, filter.into(), pagination.into())
        .await?;
    ok(response)
}

/// Mark a task as completed.
async fn complete_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(task_id): Path<String>,
) -> ApiResult<TaskResponse> {
    debug!("Complete task request: {}", task_id);

    let task_id = parse_task_id(&task_id)?;

    // This endpoint reports every domain failure as a 400, not a 404.
    let response = state
        .task_service
        .complete_task(user.email(), task_id)
        .await
        .map_err(|e| {
            AppError(TasklaneError::business_rule(format!(
                "Failed to complete task: {}",
                e
            )))
        })?;
    ok(response)
}

/// Flip a task's completion flag.
async fn toggle_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(task_id): Path<String>,
) -> ApiResult<TaskResponse> {
    debug!("Toggle task request: {}", task_id);

    let task_id = parse_task_id(&task_id)?;

    let response = state
        .task_service
        .toggle_task_completion(user.email(), task_id)
        .await
        .map_err(|e| {
            AppError(TasklaneError::business_rule(format!(
                "Failed to toggle task completion: {}",
                e
            )))
        })?;
    ok(response)
}

/// Delete a task.
async fn delete_task(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(task_id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete task request: {}", task_id);

    let task_id = parse_task_id(&task_id)?;
    state.task_service.delete_task(user.email(), task_id).await?;

    Ok(no_content())
}

/// Helper to parse a task ID from a path parameter.
fn parse_task_id(id: &str) -> Result<TaskId, AppError> {
    TaskId::parse(id)
        .map_err(|_| AppError(TasklaneError::validation(format!("Invalid task ID: {}", id))))
}
