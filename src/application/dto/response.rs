//! Response DTOs
//!
//! Wire shapes of the four resources. `createdAt` is a calendar date.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Label, Task, TaskStatus, User};

/// User response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at.date_naive(),
        }
    }
}

/// Task status response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDate,
}

impl From<TaskStatus> for TaskStatusResponse {
    fn from(status: TaskStatus) -> Self {
        Self {
            id: status.id,
            name: status.name,
            slug: status.slug,
            created_at: status.created_at.date_naive(),
        }
    }
}

/// Label response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDate,
}

impl From<Label> for LabelResponse {
    fn from(label: Label) -> Self {
        Self {
            id: label.id,
            name: label.name,
            created_at: label.created_at.date_naive(),
        }
    }
}

/// Task response
///
/// `assignee_id` stays snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub index: Option<i32>,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    pub assignee_id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    /// Status slug
    pub status: String,
    #[serde(rename = "taskLabelIds")]
    pub task_label_ids: Vec<i64>,
}

impl TaskResponse {
    pub fn from_task(task: Task, status_slug: String) -> Self {
        Self {
            id: task.id,
            index: task.index,
            created_at: task.created_at.date_naive(),
            assignee_id: task.assignee_id,
            title: task.name,
            content: task.description,
            status: status_slug,
            task_label_ids: task.label_ids,
        }
    }
}
