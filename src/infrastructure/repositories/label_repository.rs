//! Label Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Label, LabelRepository, NewLabel};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct LabelRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LabelRow> for Label {
    fn from(row: LabelRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL label repository.
#[derive(Clone)]
pub struct PgLabelRepository {
    pool: PgPool,
}

impl PgLabelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabelRepository for PgLabelRepository {
    async fn find_all(&self) -> Result<Vec<Label>, AppError> {
        let rows = sqlx::query_as::<_, LabelRow>(
            "SELECT id, name, created_at, updated_at FROM labels ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Label::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Label>, AppError> {
        let row = sqlx::query_as::<_, LabelRow>(
            "SELECT id, name, created_at, updated_at FROM labels WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Label::from))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, LabelRow>(
            "SELECT id, name, created_at, updated_at FROM labels WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Label::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Label>, AppError> {
        let row = sqlx::query_as::<_, LabelRow>(
            "SELECT id, name, created_at, updated_at FROM labels WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Label::from))
    }

    async fn create(&self, label: &NewLabel) -> Result<Label, AppError> {
        let row = sqlx::query_as::<_, LabelRow>(
            r#"
            INSERT INTO labels (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&label.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Label with this name already exists"))?;

        Ok(row.into())
    }

    async fn update(&self, label: &Label) -> Result<Label, AppError> {
        let row = sqlx::query_as::<_, LabelRow>(
            r#"
            UPDATE labels
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(label.id)
        .bind(&label.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "Label with this name already exists"))?
        .ok_or_else(|| AppError::NotFound(format!("Label with id {} not found", label.id)))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, "Label is attached to tasks"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Label with id {} not found", id)));
        }

        Ok(())
    }
}
