//! Task Status Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CreateTaskStatusRequest, TaskStatusResponse, UpdateTaskStatusRequest};
use crate::application::mapping;
use crate::domain::{NewTaskStatus, TaskStatusRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

#[async_trait]
pub trait TaskStatusService: Send + Sync {
    async fn list(&self) -> Result<Vec<TaskStatusResponse>, AppError>;

    async fn get(&self, id: i64) -> Result<TaskStatusResponse, AppError>;

    async fn create(&self, request: CreateTaskStatusRequest)
        -> Result<TaskStatusResponse, AppError>;

    async fn update(
        &self,
        id: i64,
        request: UpdateTaskStatusRequest,
    ) -> Result<TaskStatusResponse, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct TaskStatusServiceImpl {
    status_repo: Arc<dyn TaskStatusRepository>,
}

impl TaskStatusServiceImpl {
    pub fn new(status_repo: Arc<dyn TaskStatusRepository>) -> Self {
        Self { status_repo }
    }

    async fn ensure_slug_free(&self, slug: &str, except: Option<i64>) -> Result<(), AppError> {
        match self.status_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != except => Err(AppError::invalid_field(
                "slug",
                "task status with this slug already exists",
            )),
            _ => Ok(()),
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task status with id {} not found", id))
}

#[async_trait]
impl TaskStatusService for TaskStatusServiceImpl {
    async fn list(&self) -> Result<Vec<TaskStatusResponse>, AppError> {
        let statuses = self.status_repo.find_all().await?;
        Ok(statuses.into_iter().map(TaskStatusResponse::from).collect())
    }

    async fn get(&self, id: i64) -> Result<TaskStatusResponse, AppError> {
        self.status_repo
            .find_by_id(id)
            .await?
            .map(TaskStatusResponse::from)
            .ok_or_else(|| not_found(id))
    }

    async fn create(
        &self,
        request: CreateTaskStatusRequest,
    ) -> Result<TaskStatusResponse, AppError> {
        self.ensure_slug_free(&request.slug, None).await?;

        let status = self
            .status_repo
            .create(&NewTaskStatus {
                name: request.name,
                slug: request.slug,
            })
            .await?;

        tracing::info!(task_status_id = status.id, slug = %status.slug, "Task status created");
        metrics::record_mutation("task_status", "create");
        Ok(status.into())
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateTaskStatusRequest,
    ) -> Result<TaskStatusResponse, AppError> {
        let mut status = self
            .status_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if let Some(Some(slug)) = &request.slug {
            self.ensure_slug_free(slug, Some(id)).await?;
        }

        mapping::apply_task_status_update(&mut status, request);
        let status = self.status_repo.update(&status).await?;

        tracing::info!(task_status_id = status.id, slug = %status.slug, "Task status updated");
        metrics::record_mutation("task_status", "update");
        Ok(status.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.status_repo.delete(id).await?;

        tracing::info!(task_status_id = id, "Task status deleted");
        metrics::record_mutation("task_status", "delete");
        Ok(())
    }
}
