//! DTO to entity mapping.
//!
//! Applies validated request payloads to domain entities. Task payloads
//! refer to other resources (status slug, assignee id, label ids); those
//! references are resolved here and unknown ones are reported against the
//! offending field.

use std::sync::Arc;

use crate::application::dto::{
    CreateTaskRequest, CreateUserRequest, UpdateLabelRequest, UpdateTaskRequest,
    UpdateTaskStatusRequest, UpdateUserRequest,
};
use crate::domain::{
    Label, LabelRepository, NewTask, NewUser, Task, TaskStatus, TaskStatusRepository, User,
    UserRepository,
};
use crate::shared::error::AppError;

pub fn new_user(request: CreateUserRequest, password_digest: String) -> NewUser {
    NewUser {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        password_digest,
    }
}

/// Apply a partial user update. The password, when present, has already
/// been hashed into `password_digest`.
pub fn apply_user_update(
    user: &mut User,
    request: UpdateUserRequest,
    password_digest: Option<String>,
) {
    if let Some(Some(email)) = request.email {
        user.email = email;
    }
    if let Some(first_name) = request.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        user.last_name = last_name;
    }
    if let Some(digest) = password_digest {
        user.password_digest = digest;
    }
}

pub fn apply_task_status_update(status: &mut TaskStatus, request: UpdateTaskStatusRequest) {
    if let Some(Some(name)) = request.name {
        status.name = name;
    }
    if let Some(Some(slug)) = request.slug {
        status.slug = slug;
    }
}

pub fn apply_label_update(label: &mut Label, request: UpdateLabelRequest) {
    if let Some(Some(name)) = request.name {
        label.name = name;
    }
}

/// Resolves the references carried by task payloads.
#[derive(Clone)]
pub struct TaskMapper {
    statuses: Arc<dyn TaskStatusRepository>,
    users: Arc<dyn UserRepository>,
    labels: Arc<dyn LabelRepository>,
}

impl TaskMapper {
    pub fn new(
        statuses: Arc<dyn TaskStatusRepository>,
        users: Arc<dyn UserRepository>,
        labels: Arc<dyn LabelRepository>,
    ) -> Self {
        Self {
            statuses,
            users,
            labels,
        }
    }

    pub async fn to_new_task(&self, request: CreateTaskRequest) -> Result<NewTask, AppError> {
        let status = self.resolve_status(&request.status).await?;
        let assignee_id = self.resolve_assignee(request.assignee_id).await?;
        let label_ids = self
            .resolve_labels(request.task_label_ids.unwrap_or_default())
            .await?;

        Ok(NewTask {
            index: request.index,
            name: request.title,
            description: request.content,
            task_status_id: status.id,
            assignee_id,
            label_ids,
        })
    }

    pub async fn apply_update(
        &self,
        task: &mut Task,
        request: UpdateTaskRequest,
    ) -> Result<(), AppError> {
        if let Some(index) = request.index {
            task.index = index;
        }
        if let Some(Some(title)) = request.title {
            task.name = title;
        }
        if let Some(content) = request.content {
            task.description = content;
        }
        if let Some(Some(slug)) = request.status {
            task.task_status_id = self.resolve_status(&slug).await?.id;
        }
        if let Some(assignee_id) = request.assignee_id {
            task.assignee_id = self.resolve_assignee(assignee_id).await?;
        }
        if let Some(label_ids) = request.task_label_ids {
            task.label_ids = self.resolve_labels(label_ids.unwrap_or_default()).await?;
        }
        Ok(())
    }

    /// Slug of the status `task` is in.
    pub async fn status_slug(&self, task: &Task) -> Result<String, AppError> {
        self.statuses
            .find_by_id(task.task_status_id)
            .await?
            .map(|status| status.slug)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Task {} references missing status {}",
                    task.id, task.task_status_id
                ))
            })
    }

    async fn resolve_status(&self, slug: &str) -> Result<TaskStatus, AppError> {
        self.statuses
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                AppError::invalid_field("status", format!("task status '{}' does not exist", slug))
            })
    }

    async fn resolve_assignee(&self, assignee_id: Option<i64>) -> Result<Option<i64>, AppError> {
        let Some(id) = assignee_id else {
            return Ok(None);
        };
        match self.users.find_by_id(id).await? {
            Some(user) => Ok(Some(user.id)),
            None => Err(AppError::invalid_field(
                "assignee_id",
                format!("user with id {} does not exist", id),
            )),
        }
    }

    /// Sorted, de-duplicated label ids; every id must exist.
    async fn resolve_labels(&self, mut ids: Vec<i64>) -> Result<Vec<i64>, AppError> {
        ids.sort_unstable();
        ids.dedup();

        let found = self.labels.find_by_ids(&ids).await?;
        if let Some(missing) = ids
            .iter()
            .find(|id| !found.iter().any(|label| label.id == **id))
        {
            return Err(AppError::invalid_field(
                "taskLabelIds",
                format!("label with id {} does not exist", missing),
            ));
        }

        Ok(ids)
    }
}
