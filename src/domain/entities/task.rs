//! Task entity and repository trait.
//!
//! Maps to the `tasks` table plus the `task_labels` join table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// A unit of work. References its status, an optional assignee and any
/// number of labels by id.
///
/// Maps to the `tasks` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - task_index: INTEGER NULL
/// - name: TEXT NOT NULL
/// - description: TEXT NULL
/// - task_status_id: BIGINT NOT NULL REFERENCES task_statuses(id)
/// - assignee_id: BIGINT NULL REFERENCES users(id)
/// - created_at / updated_at: TIMESTAMPTZ
///
/// `label_ids` is the sorted content of `task_labels` for this task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub index: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub task_status_id: i64,
    pub assignee_id: Option<i64>,
    pub label_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub index: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub task_status_id: i64,
    pub assignee_id: Option<i64>,
    pub label_ids: Vec<i64>,
}

/// Criteria for listing tasks. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Case-insensitive substring of the task name
    pub title_cont: Option<String>,
    pub assignee_id: Option<i64>,
    /// Status slug
    pub status: Option<String>,
    pub label_id: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks matching `filter`, ordered by id.
    async fn find_all(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;

    /// Insert the task and its label links atomically.
    async fn create(&self, task: &NewTask) -> Result<Task, AppError>;

    /// Update scalar fields and replace label links atomically.
    async fn update(&self, task: &Task) -> Result<Task, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
