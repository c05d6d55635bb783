//! Startup seed data.
//!
//! Ensures the default account, task statuses and labels exist. Rows that
//! are already present are left untouched, so seeding is safe on every boot.

use std::sync::Arc;

use super::auth_service::hash_password;
use crate::config::SeedSettings;
use crate::domain::{
    LabelRepository, NewLabel, NewTaskStatus, NewUser, TaskStatusRepository, UserRepository,
    DEFAULT_LABELS, DEFAULT_TASK_STATUSES,
};
use crate::shared::error::AppError;

pub struct SeedService {
    users: Arc<dyn UserRepository>,
    statuses: Arc<dyn TaskStatusRepository>,
    labels: Arc<dyn LabelRepository>,
}

impl SeedService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        statuses: Arc<dyn TaskStatusRepository>,
        labels: Arc<dyn LabelRepository>,
    ) -> Self {
        Self {
            users,
            statuses,
            labels,
        }
    }

    /// Insert whatever default rows are missing. Returns how many were created.
    pub async fn run(&self, settings: &SeedSettings) -> Result<usize, AppError> {
        let mut created = 0;

        if self
            .users
            .find_by_email(&settings.admin_email)
            .await?
            .is_none()
        {
            self.users
                .create(&NewUser {
                    first_name: None,
                    last_name: None,
                    email: settings.admin_email.clone(),
                    password_digest: hash_password(&settings.admin_password)?,
                })
                .await?;
            created += 1;
        }

        for (slug, name) in DEFAULT_TASK_STATUSES {
            if self.statuses.find_by_slug(slug).await?.is_none() {
                self.statuses
                    .create(&NewTaskStatus {
                        name: name.to_string(),
                        slug: slug.to_string(),
                    })
                    .await?;
                created += 1;
            }
        }

        for name in DEFAULT_LABELS {
            if self.labels.find_by_name(name).await?.is_none() {
                self.labels
                    .create(&NewLabel {
                        name: name.to_string(),
                    })
                    .await?;
                created += 1;
            }
        }

        tracing::info!(created, "Seed data ensured");
        Ok(created)
    }
}
