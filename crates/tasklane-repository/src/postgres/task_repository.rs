//! Postgres task repository implementation.

use crate::{traits::TaskRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tasklane_core::{
    Page, PageRequest, ProjectId, Task, TaskFilter, TaskId, TasklaneError, TasklaneResult,
};
use tracing::debug;
use uuid::Uuid;

/// Postgres task repository implementation.
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: Arc<DatabasePool>,
}

impl PgTaskRepository {
    /// Creates a new Postgres task repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a task.
#[derive(Debug, FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    due_date: NaiveDate,
    completed: bool,
    project_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            completed: row.completed,
            project_id: ProjectId::from_uuid(row.project_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const TASK_COLUMNS: &str =
    "id, title, description, due_date, completed, project_id, created_at, updated_at";

/// Maps a requested sort field onto a tasks column.
///
/// Unknown fields fall back to the primary key rather than erroring.
fn sort_column(field: &str) -> &'static str {
    match field {
        "title" => "title",
        "description" => "description",
        "dueDate" | "due_date" => "due_date",
        "completed" => "completed",
        "createdAt" | "created_at" => "created_at",
        "updatedAt" | "updated_at" => "updated_at",
        _ => "id",
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn save(&self, task: &Task) -> TasklaneResult<Task> {
        debug!("Saving new task: {}", task.title);

        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (id, title, description, due_date, completed,
                               project_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, due_date, completed,
                      project_id, created_at, updated_at
            "#,
        )
        .bind(task.id.into_inner())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.completed)
        .bind(task.project_id.into_inner())
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Task::from(row))
    }

    async fn update(&self, task: &Task) -> TasklaneResult<Task> {
        debug!("Updating task: {}", task.id);

        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, due_date = $4, completed = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, title, description, due_date, completed,
                      project_id, created_at, updated_at
            "#,
        )
        .bind(task.id.into_inner())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(task.completed)
        .bind(task.updated_at)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Task::from)
            .ok_or_else(|| TasklaneError::not_found("Task", task.id))
    }

    async fn find_by_id(&self, id: TaskId) -> TasklaneResult<Option<Task>> {
        debug!("Finding task by id: {}", id);

        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, completed,
                   project_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Task::from))
    }

    async fn find_by_project(&self, project_id: ProjectId) -> TasklaneResult<Vec<Task>> {
        debug!("Finding tasks for project: {}", project_id);

        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, completed,
                   project_id, created_at, updated_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(project_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn find_by_project_paginated(
        &self,
        project_id: ProjectId,
        filter: TaskFilter,
        page: PageRequest,
    ) -> TasklaneResult<Page<Task>> {
        debug!(
            "Finding tasks for project: {}, filter: {:?}, page: {}, size: {}",
            project_id, filter, page.page, page.size
        );

        // The WHERE tail grows with whichever filters are present; binds
        // are appended in the same order below.
        let mut conditions = String::from("project_id = $1");
        let mut next_param = 2;
        if filter.title.is_some() {
            conditions.push_str(&format!(" AND title ILIKE '%' || ${} || '%'", next_param));
            next_param += 1;
        }
        if filter.completed.is_some() {
            conditions.push_str(&format!(" AND completed = ${}", next_param));
            next_param += 1;
        }

        let count_sql = format!("SELECT COUNT(*) FROM tasks WHERE {}", conditions);
        let mut count_query =
            sqlx::query_scalar::<_, i64>(&count_sql).bind(project_id.into_inner());
        if let Some(title) = &filter.title {
            count_query = count_query.bind(title);
        }
        if let Some(completed) = filter.completed {
            count_query = count_query.bind(completed);
        }
        let total = count_query.fetch_one(self.pool.inner()).await?;

        let select_sql = format!(
            "SELECT {} FROM tasks WHERE {} ORDER BY {} {} LIMIT ${} OFFSET ${}",
            TASK_COLUMNS,
            conditions,
            sort_column(&page.sort.field),
            page.sort.direction.as_sql(),
            next_param,
            next_param + 1,
        );
        let mut select_query =
            sqlx::query_as::<_, TaskRow>(&select_sql).bind(project_id.into_inner());
        if let Some(title) = &filter.title {
            select_query = select_query.bind(title);
        }
        if let Some(completed) = filter.completed {
            select_query = select_query.bind(completed);
        }
        let rows = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.pool.inner())
            .await?;

        let tasks: Vec<Task> = rows.into_iter().map(Task::from).collect();

        Ok(Page::new(tasks, page.page, page.size, total as u64))
    }

    async fn delete(&self, id: TaskId) -> TasklaneResult<bool> {
        debug!("Deleting task: {}", id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(project_id.into_inner())
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }

    async fn count_completed_by_project(&self, project_id: ProjectId) -> TasklaneResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks WHERE project_id = $1 AND completed = TRUE",
        )
        .bind(project_id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for PgTaskRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgTaskRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column("dueDate"), "due_date");
        assert_eq!(sort_column("due_date"), "due_date");
        assert_eq!(sort_column("completed"), "completed");
        assert_eq!(sort_column("title"), "title");
    }

    #[test]
    fn test_sort_column_rejects_unknown_fields() {
        assert_eq!(sort_column("priority"), "id");
        assert_eq!(sort_column("due_date; --"), "id");
    }
}
