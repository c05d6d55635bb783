//! Task Repository Implementation
//!
//! Tasks are stored in `tasks`; label links live in `task_labels` and are
//! written in the same transaction as the task row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use crate::domain::{NewTask, Task, TaskFilter, TaskRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i64,
    task_index: Option<i32>,
    name: String,
    description: Option<String>,
    task_status_id: i64,
    assignee_id: Option<i64>,
    label_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            id: self.id,
            index: self.task_index,
            name: self.name,
            description: self.description,
            task_status_id: self.task_status_id,
            assignee_id: self.assignee_id,
            label_ids: self.label_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

const SELECT_TASKS: &str = r#"
    SELECT t.id, t.task_index, t.name, t.description, t.task_status_id,
           t.assignee_id, t.created_at, t.updated_at,
           COALESCE(
               ARRAY(SELECT tl.label_id FROM task_labels tl
                     WHERE tl.task_id = t.id ORDER BY tl.label_id),
               '{}'
           ) AS label_ids
    FROM tasks t
"#;

/// Escape LIKE wildcards so user input matches literally.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// PostgreSQL task repository.
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_labels(
        tx: &mut Transaction<'_, Postgres>,
        task_id: i64,
        label_ids: &[i64],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM task_labels WHERE task_id = $1")
            .bind(task_id)
            .execute(&mut **tx)
            .await?;

        if label_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO task_labels (task_id, label_id)
            SELECT $1, label_id FROM UNNEST($2::BIGINT[]) AS label_id
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(task_id)
        .bind(label_ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::from_write(e, "Task references a label that does not exist"))?;

        Ok(())
    }

    async fn fetch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Task, AppError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!("{} WHERE t.id = $1", SELECT_TASKS))
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(row.into_task())
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_all(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_TASKS);
        query.push(" WHERE TRUE");

        if let Some(title) = &filter.title_cont {
            query
                .push(" AND t.name ILIKE ")
                .push_bind(like_pattern(title))
                .push(" ESCAPE '\\'");
        }
        if let Some(assignee_id) = filter.assignee_id {
            query.push(" AND t.assignee_id = ").push_bind(assignee_id);
        }
        if let Some(status) = &filter.status {
            query
                .push(" AND t.task_status_id IN (SELECT s.id FROM task_statuses s WHERE s.slug = ")
                .push_bind(status.clone())
                .push(")");
        }
        if let Some(label_id) = filter.label_id {
            query
                .push(" AND EXISTS (SELECT 1 FROM task_labels f WHERE f.task_id = t.id AND f.label_id = ")
                .push_bind(label_id)
                .push(")");
        }
        query.push(" ORDER BY t.id");

        let rows = query
            .build_query_as::<TaskRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let row = sqlx::query_as::<_, TaskRow>(&format!("{} WHERE t.id = $1", SELECT_TASKS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn create(&self, task: &NewTask) -> Result<Task, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (task_index, name, description, task_status_id, assignee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(task.index)
        .bind(&task.name)
        .bind(&task.description)
        .bind(task.task_status_id)
        .bind(task.assignee_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_write(e, "Task references a missing status or assignee"))?;

        Self::replace_labels(&mut tx, id, &task.label_ids).await?;
        let created = Self::fetch_in_tx(&mut tx, id).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET task_index = $2,
                name = $3,
                description = $4,
                task_status_id = $5,
                assignee_id = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(task.id)
        .bind(task.index)
        .bind(&task.name)
        .bind(&task.description)
        .bind(task.task_status_id)
        .bind(task.assignee_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_write(e, "Task references a missing status or assignee"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task with id {} not found", task.id)));
        }

        Self::replace_labels(&mut tx, task.id, &task.label_ids).await?;
        let updated = Self::fetch_in_tx(&mut tx, task.id).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // task_labels rows go with the task via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task with id {} not found", id)));
        }

        Ok(())
    }
}
