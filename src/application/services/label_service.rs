//! Label Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::{CreateLabelRequest, LabelResponse, UpdateLabelRequest};
use crate::application::mapping;
use crate::domain::{LabelRepository, NewLabel};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

#[async_trait]
pub trait LabelService: Send + Sync {
    async fn list(&self) -> Result<Vec<LabelResponse>, AppError>;

    async fn get(&self, id: i64) -> Result<LabelResponse, AppError>;

    async fn create(&self, request: CreateLabelRequest) -> Result<LabelResponse, AppError>;

    async fn update(&self, id: i64, request: UpdateLabelRequest)
        -> Result<LabelResponse, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

pub struct LabelServiceImpl {
    label_repo: Arc<dyn LabelRepository>,
}

impl LabelServiceImpl {
    pub fn new(label_repo: Arc<dyn LabelRepository>) -> Self {
        Self { label_repo }
    }

    async fn ensure_name_free(&self, name: &str, except: Option<i64>) -> Result<(), AppError> {
        match self.label_repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != except => Err(AppError::invalid_field(
                "name",
                "label with this name already exists",
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl LabelService for LabelServiceImpl {
    async fn list(&self) -> Result<Vec<LabelResponse>, AppError> {
        let labels = self.label_repo.find_all().await?;
        Ok(labels.into_iter().map(LabelResponse::from).collect())
    }

    async fn get(&self, id: i64) -> Result<LabelResponse, AppError> {
        self.label_repo
            .find_by_id(id)
            .await?
            .map(LabelResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Label with id {} not found", id)))
    }

    async fn create(&self, request: CreateLabelRequest) -> Result<LabelResponse, AppError> {
        self.ensure_name_free(&request.name, None).await?;

        let label = self
            .label_repo
            .create(&NewLabel { name: request.name })
            .await?;

        tracing::info!(label_id = label.id, "Label created");
        metrics::record_mutation("label", "create");
        Ok(label.into())
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateLabelRequest,
    ) -> Result<LabelResponse, AppError> {
        let mut label = self
            .label_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Label with id {} not found", id)))?;

        if let Some(Some(name)) = &request.name {
            self.ensure_name_free(name, Some(id)).await?;
        }

        mapping::apply_label_update(&mut label, request);
        let label = self.label_repo.update(&label).await?;

        tracing::info!(label_id = label.id, "Label updated");
        metrics::record_mutation("label", "update");
        Ok(label.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.label_repo.delete(id).await?;

        tracing::info!(label_id = id, "Label deleted");
        metrics::record_mutation("label", "delete");
        Ok(())
    }
}
