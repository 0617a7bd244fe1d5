//! Postgres project repository implementation.

use crate::{traits::ProjectRepository, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tasklane_core::{Page, PageRequest, Project, ProjectId, TasklaneResult, UserId};
use tracing::debug;
use uuid::Uuid;

/// Postgres project repository implementation.
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: Arc<DatabasePool>,
}

impl PgProjectRepository {
    /// Creates a new Postgres project repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a project.
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: ProjectId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            user_id: UserId::from_uuid(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Maps a requested sort field onto a projects column.
///
/// Unknown fields fall back to the primary key rather than erroring.
fn sort_column(field: &str) -> &'static str {
    match field {
        "title" => "title",
        "description" => "description",
        "createdAt" | "created_at" => "created_at",
        "updatedAt" | "updated_at" => "updated_at",
        _ => "id",
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn save(&self, project: &Project) -> TasklaneResult<Project> {
        debug!("Saving new project: {}", project.title);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (id, title, description, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, user_id, created_at, updated_at
            "#,
        )
        .bind(project.id.into_inner())
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.user_id.into_inner())
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Project::from(row))
    }

    async fn find_by_user(&self, user_id: UserId) -> TasklaneResult<Vec<Project>> {
        debug!("Finding projects for user: {}", user_id);

        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM projects
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_by_user_paginated(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> TasklaneResult<Page<Project>> {
        debug!(
            "Finding projects for user: {}, page: {}, size: {}",
            user_id, page.page, page.size
        );

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(self.pool.inner())
            .await?;

        let query = format!(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM projects
            WHERE user_id = $1
            ORDER BY {} {}
            LIMIT $2 OFFSET $3
            "#,
            sort_column(&page.sort.field),
            page.sort.direction.as_sql(),
        );

        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(user_id.into_inner())
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.pool.inner())
            .await?;

        let projects: Vec<Project> = rows.into_iter().map(Project::from).collect();

        Ok(Page::new(projects, page.page, page.size, total as u64))
    }

    async fn find_by_id_and_user(
        &self,
        id: ProjectId,
        user_id: UserId,
    ) -> TasklaneResult<Option<Project>> {
        debug!("Finding project {} for user {}", id, user_id);

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, title, description, user_id, created_at, updated_at
            FROM projects
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Project::from))
    }
}

impl std::fmt::Debug for PgProjectRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProjectRepository").finish_non_exhaustive()
    }
}
