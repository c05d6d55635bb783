//! Label entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// A tag attachable to any number of tasks. Names are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLabel {
    pub name: String,
}

/// Labels seeded on startup.
pub const DEFAULT_LABELS: [&str; 2] = ["bug", "feature"];

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabelRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Label>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Label>, AppError>;

    /// Labels whose id is in `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Label>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Label>, AppError>;

    async fn create(&self, label: &NewLabel) -> Result<Label, AppError>;

    async fn update(&self, label: &Label) -> Result<Label, AppError>;

    /// `Conflict` while tasks still carry the label.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
