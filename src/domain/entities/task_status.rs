//! Task status entity and repository trait.
//!
//! Maps to the `task_statuses` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// A workflow state a task can be in (e.g. "draft", "published").
///
/// Tasks refer to statuses by `slug` on the wire and by `id` in storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatus {
    pub id: i64,

    /// Human readable name
    pub name: String,

    /// Unique machine name
    pub slug: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskStatus {
    pub name: String,
    pub slug: String,
}

/// Statuses seeded on startup, as (slug, name).
pub const DEFAULT_TASK_STATUSES: [(&str, &str); 5] = [
    ("draft", "Draft"),
    ("to_review", "To review"),
    ("to_be_fixed", "To be fixed"),
    ("to_publish", "To publish"),
    ("published", "Published"),
];

/// Repository trait for TaskStatus data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStatusRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<TaskStatus>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TaskStatus>, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<TaskStatus>, AppError>;

    async fn create(&self, status: &NewTaskStatus) -> Result<TaskStatus, AppError>;

    async fn update(&self, status: &TaskStatus) -> Result<TaskStatus, AppError>;

    /// `Conflict` while tasks still use the status.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
