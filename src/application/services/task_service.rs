//! Task Service
//!
//! Tasks are exposed with their status slug; references in payloads are
//! resolved by [`TaskMapper`] before anything is written.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::application::mapping::TaskMapper;
use crate::domain::{TaskFilter, TaskRepository, TaskStatusRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

#[async_trait]
pub trait TaskService: Send + Sync {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<TaskResponse>, AppError>;

    async fn get(&self, id: i64) -> Result<TaskResponse, AppError>;

    async fn create(&self, request: CreateTaskRequest) -> Result<TaskResponse, AppError>;

    async fn update(&self, id: i64, request: UpdateTaskRequest)
        -> Result<TaskResponse, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct TaskServiceImpl {
    task_repo: Arc<dyn TaskRepository>,
    status_repo: Arc<dyn TaskStatusRepository>,
    mapper: TaskMapper,
}

impl TaskServiceImpl {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        status_repo: Arc<dyn TaskStatusRepository>,
        mapper: TaskMapper,
    ) -> Self {
        Self {
            task_repo,
            status_repo,
            mapper,
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task with id {} not found", id))
}

#[async_trait]
impl TaskService for TaskServiceImpl {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<TaskResponse>, AppError> {
        let tasks = self.task_repo.find_all(&filter).await?;
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let slugs: HashMap<i64, String> = self
            .status_repo
            .find_all()
            .await?
            .into_iter()
            .map(|status| (status.id, status.slug))
            .collect();

        tasks
            .into_iter()
            .map(|task| {
                let slug = slugs.get(&task.task_status_id).cloned().ok_or_else(|| {
                    AppError::Internal(format!(
                        "Task {} references missing status {}",
                        task.id, task.task_status_id
                    ))
                })?;
                Ok(TaskResponse::from_task(task, slug))
            })
            .collect()
    }

    async fn get(&self, id: i64) -> Result<TaskResponse, AppError> {
        let task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let slug = self.mapper.status_slug(&task).await?;
        Ok(TaskResponse::from_task(task, slug))
    }

    async fn create(&self, request: CreateTaskRequest) -> Result<TaskResponse, AppError> {
        let new_task = self.mapper.to_new_task(request).await?;
        let task = self.task_repo.create(&new_task).await?;

        tracing::info!(task_id = task.id, "Task created");
        metrics::record_mutation("task", "create");

        let slug = self.mapper.status_slug(&task).await?;
        Ok(TaskResponse::from_task(task, slug))
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateTaskRequest,
    ) -> Result<TaskResponse, AppError> {
        let mut task = self
            .task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        self.mapper.apply_update(&mut task, request).await?;
        let task = self.task_repo.update(&task).await?;

        tracing::info!(task_id = task.id, "Task updated");
        metrics::record_mutation("task", "update");

        let slug = self.mapper.status_slug(&task).await?;
        Ok(TaskResponse::from_task(task, slug))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.task_repo.delete(id).await?;

        tracing::info!(task_id = id, "Task deleted");
        metrics::record_mutation("task", "delete");
        Ok(())
    }
}
