//! Task Status Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewTaskStatus, TaskStatus, TaskStatusRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TaskStatusRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskStatusRow> for TaskStatus {
    fn from(row: TaskStatusRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL task status repository.
#[derive(Clone)]
pub struct PgTaskStatusRepository {
    pool: PgPool,
}

impl PgTaskStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStatusRepository for PgTaskStatusRepository {
    async fn find_all(&self) -> Result<Vec<TaskStatus>, AppError> {
        let rows = sqlx::query_as::<_, TaskStatusRow>(
            "SELECT id, name, slug, created_at, updated_at FROM task_statuses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskStatus::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TaskStatus>, AppError> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            "SELECT id, name, slug, created_at, updated_at FROM task_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskStatus::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<TaskStatus>, AppError> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            "SELECT id, name, slug, created_at, updated_at FROM task_statuses WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskStatus::from))
    }

    async fn create(&self, status: &NewTaskStatus) -> Result<TaskStatus, AppError> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            r#"
            INSERT INTO task_statuses (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(&status.name)
        .bind(&status.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Task status with this slug already exists"))?;

        Ok(row.into())
    }

    async fn update(&self, status: &TaskStatus) -> Result<TaskStatus, AppError> {
        let row = sqlx::query_as::<_, TaskStatusRow>(
            r#"
            UPDATE task_statuses
            SET name = $2, slug = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(status.id)
        .bind(&status.name)
        .bind(&status.slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Task status with this slug already exists"))?
        .ok_or_else(|| {
            AppError::NotFound(format!("Task status with id {} not found", status.id))
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM task_statuses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, "Task status is used by tasks"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Task status with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
